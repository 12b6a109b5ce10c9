use soroban_sdk::{Address, Env, TryFromVal, Val};

use crate::constants::{POLL_TTL_LEDGERS, POLL_TTL_THRESHOLD};
use crate::types::{DataKey, Proposal, Voter};
use crate::workflow::WorkflowStatus;

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, POLL_TTL_THRESHOLD, POLL_TTL_LEDGERS);
}

/// Reads `key`, extending its TTL when present so entries touched by a live
/// poll are never archived mid-poll.
fn load<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump(env, key);
    }
    value
}

// ── Workflow Status ──────────────────────────────────────────────────────────

pub fn get_status(env: &Env) -> Option<WorkflowStatus> {
    load(env, &DataKey::Status)
}

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().persistent().set(&DataKey::Status, &status);
    bump(env, &DataKey::Status);
}

// ── Voters ───────────────────────────────────────────────────────────────────

/// Unknown addresses read back as an unregistered voter.
pub fn get_voter(env: &Env, address: &Address) -> Voter {
    load(env, &DataKey::Voter(address.clone())).unwrap_or_default()
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    bump(env, &key);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u32 {
    load(env, &DataKey::ProposalCount).unwrap_or(0u32)
}

pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    load(env, &DataKey::Proposal(proposal_id))
}

pub fn save_proposal(env: &Env, proposal_id: u32, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal_id);
    env.storage().persistent().set(&key, proposal);
    bump(env, &key);
}

/// Appends `proposal` at the next free index and returns that index.
pub fn push_proposal(env: &Env, proposal: &Proposal) -> u32 {
    let proposal_id = get_proposal_count(env);
    save_proposal(env, proposal_id, proposal);

    env.storage()
        .persistent()
        .set(&DataKey::ProposalCount, &(proposal_id + 1));
    bump(env, &DataKey::ProposalCount);

    proposal_id
}

// ── Tally ────────────────────────────────────────────────────────────────────

/// Until a vote is cast the leader is the genesis proposal.
pub fn get_leader(env: &Env) -> u32 {
    load(env, &DataKey::Leader).unwrap_or(0u32)
}

pub fn set_leader(env: &Env, proposal_id: u32) {
    env.storage().persistent().set(&DataKey::Leader, &proposal_id);
    bump(env, &DataKey::Leader);
}

pub fn get_winning_proposal(env: &Env) -> Option<u32> {
    load(env, &DataKey::WinningProposal)
}

pub fn set_winning_proposal(env: &Env, proposal_id: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::WinningProposal, &proposal_id);
    bump(env, &DataKey::WinningProposal);
}

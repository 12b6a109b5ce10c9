//! Contract events. These are the poll's audit trail for indexers and
//! external tallies; topics are short symbols, data is the payload.

use soroban_sdk::{symbol_short, Address, Env};

use crate::workflow::WorkflowStatus;

pub fn initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((symbol_short!("init"),), admin.clone());
}

pub fn voter_registered(env: &Env, voter: &Address) {
    env.events()
        .publish((symbol_short!("voter_reg"),), voter.clone());
}

pub fn proposal_registered(env: &Env, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("prop_reg"),), proposal_id);
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    env.events()
        .publish((symbol_short!("voted"),), (voter.clone(), proposal_id));
}

pub fn workflow_status_changed(env: &Env, previous: WorkflowStatus, new: WorkflowStatus) {
    env.events()
        .publish((symbol_short!("wf_status"),), (previous, new));
}

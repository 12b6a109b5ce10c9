use authorization as auth;
use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use crate::{
    constants::GENESIS_DESCRIPTION,
    errors::VotingError,
    events, storage,
    types::{Proposal, Voter},
    validation::validate_description,
    workflow::{WorkflowAction, WorkflowStatus},
};

#[contract]
pub struct VotingContract;

// ── Guards ───────────────────────────────────────────────────────────────────

fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    auth::verify_and_require_admin(env, caller)?;
    Ok(())
}

/// Returns the caller's voter record if the caller is on the whitelist.
fn require_voter(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    caller.require_auth();
    let voter = storage::get_voter(env, caller);
    if !voter.is_registered {
        return Err(VotingError::NotAuthorized);
    }
    Ok(voter)
}

fn current_status(env: &Env) -> Result<WorkflowStatus, VotingError> {
    storage::get_status(env).ok_or(VotingError::NotInitialized)
}

fn require_status(env: &Env, expected: WorkflowStatus) -> Result<(), VotingError> {
    let current = current_status(env)?;
    if current != expected {
        log!(env, "invalid phase: expected, current", expected, current);
        return Err(VotingError::InvalidPhase);
    }
    Ok(())
}

/// Moves the workflow one step forward through `action`, rejecting the call
/// when the current status does not allow it.
fn advance(env: &Env, action: WorkflowAction) -> Result<WorkflowStatus, VotingError> {
    let previous = current_status(env)?;
    let next = match previous.apply(action) {
        Some(next) => next,
        None => {
            log!(
                env,
                "invalid phase: expected, current",
                action.required_status(),
                previous
            );
            return Err(VotingError::InvalidPhase);
        }
    };

    storage::set_status(env, next);

    log!(env, "workflow status changed", previous, next);
    events::workflow_status_changed(env, previous, next);

    Ok(next)
}

/// Keeps the running leader in step with a freshly counted vote.
///
/// The leader is the proposal with the highest count, the lowest index among
/// equals, so it always matches an index-order scan for the first maximum.
fn update_leader(env: &Env, proposal_id: u32, vote_count: u32) {
    let leader = storage::get_leader(env);
    if leader == proposal_id {
        return;
    }

    let leader_count = storage::get_proposal(env, leader).map_or(0, |p| p.vote_count);
    if vote_count > leader_count || (vote_count == leader_count && proposal_id < leader) {
        storage::set_leader(env, proposal_id);
    }
}

#[contractimpl]
impl VotingContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the poll with its administrator.
    /// Can only be called once.
    pub fn initialize(env: Env, admin: Address) -> Result<(), VotingError> {
        admin.require_auth();
        auth::initialize_admin(&env, &admin)?;

        storage::set_status(&env, WorkflowStatus::RegisteringVoters);

        events::initialized(&env, &admin);
        Ok(())
    }

    // ── Administration ───────────────────────────────────────────────────────

    pub fn admin(env: Env) -> Result<Address, VotingError> {
        auth::get_admin(&env).ok_or(VotingError::NotInitialized)
    }

    /// Hand the administrator role to `new_admin`. Allowed in any phase.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), VotingError> {
        auth::transfer_admin(&env, &caller, &new_admin)?;
        Ok(())
    }

    // ── Voter Registration ───────────────────────────────────────────────────

    /// Whitelist `voter`. Admin only, while voters are being registered.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        require_admin(&env, &caller)?;
        require_status(&env, WorkflowStatus::RegisteringVoters)?;

        if storage::get_voter(&env, &voter).is_registered {
            return Err(VotingError::AlreadyRegistered);
        }

        storage::save_voter(
            &env,
            &voter,
            &Voter {
                is_registered: true,
                ..Voter::default()
            },
        );

        events::voter_registered(&env, &voter);
        Ok(())
    }

    /// Look up any address. Only whitelisted voters may query; unknown
    /// addresses come back unregistered.
    pub fn get_voter(env: Env, caller: Address, voter: Address) -> Result<Voter, VotingError> {
        require_voter(&env, &caller)?;
        Ok(storage::get_voter(&env, &voter))
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Open proposal registration and append the genesis proposal at
    /// index 0.
    pub fn start_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        require_admin(&env, &caller)?;
        advance(&env, WorkflowAction::StartProposalsRegistering)?;

        storage::push_proposal(
            &env,
            &Proposal {
                description: String::from_str(&env, GENESIS_DESCRIPTION),
                vote_count: 0,
            },
        );
        Ok(())
    }

    /// Submit a proposal. Returns its index.
    pub fn add_proposal(env: Env, caller: Address, description: String) -> Result<u32, VotingError> {
        require_voter(&env, &caller)?;
        require_status(&env, WorkflowStatus::ProposalsRegistrationStarted)?;
        validate_description(&description)?;

        let proposal_id = storage::push_proposal(
            &env,
            &Proposal {
                description,
                vote_count: 0,
            },
        );

        events::proposal_registered(&env, proposal_id);
        Ok(proposal_id)
    }

    pub fn end_proposals_registering(env: Env, caller: Address) -> Result<(), VotingError> {
        require_admin(&env, &caller)?;
        advance(&env, WorkflowAction::EndProposalsRegistering)?;
        Ok(())
    }

    pub fn get_one_proposal(env: Env, caller: Address, proposal_id: u32) -> Result<Proposal, VotingError> {
        require_voter(&env, &caller)?;

        if proposal_id >= storage::get_proposal_count(&env) {
            return Err(VotingError::IndexOutOfRange);
        }
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::IndexOutOfRange)
    }

    /// Number of stored proposals, genesis included.
    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        require_admin(&env, &caller)?;
        advance(&env, WorkflowAction::StartVotingSession)?;
        Ok(())
    }

    /// Cast the caller's single vote for `proposal_id`.
    pub fn set_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        let mut voter = require_voter(&env, &caller)?;
        require_status(&env, WorkflowStatus::VotingSessionStarted)?;

        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::ProposalNotFound)?;

        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }

        proposal.vote_count = proposal
            .vote_count
            .checked_add(1)
            .ok_or(VotingError::Overflow)?;
        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;

        storage::save_proposal(&env, proposal_id, &proposal);
        storage::save_voter(&env, &caller, &voter);
        update_leader(&env, proposal_id, proposal.vote_count);

        events::voted(&env, &caller, proposal_id);
        Ok(())
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), VotingError> {
        require_admin(&env, &caller)?;
        advance(&env, WorkflowAction::EndVotingSession)?;
        Ok(())
    }

    // ── Tally ────────────────────────────────────────────────────────────────

    /// Close the poll and record the winner. Ties go to the lowest index.
    pub fn tally_votes(env: Env, caller: Address) -> Result<(), VotingError> {
        require_admin(&env, &caller)?;
        advance(&env, WorkflowAction::TallyVotes)?;

        storage::set_winning_proposal(&env, storage::get_leader(&env));
        Ok(())
    }

    /// Fails with `InvalidPhase` until votes are tallied.
    pub fn winning_proposal_id(env: Env) -> Result<u32, VotingError> {
        storage::get_winning_proposal(&env).ok_or(VotingError::InvalidPhase)
    }

    pub fn winning_proposal(env: Env) -> Result<Proposal, VotingError> {
        let winning_id = Self::winning_proposal_id(env.clone())?;
        storage::get_proposal(&env, winning_id).ok_or(VotingError::ProposalNotFound)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn status(env: Env) -> Result<WorkflowStatus, VotingError> {
        current_status(&env)
    }
}

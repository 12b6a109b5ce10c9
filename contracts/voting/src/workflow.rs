//! Poll workflow state machine
//!
//! The poll moves through six phases in a fixed order, one step per admin
//! action, and never goes back:
//!
//! ```text
//! RegisteringVoters
//!   └─ StartProposalsRegistering ─► ProposalsRegistrationStarted
//!        └─ EndProposalsRegistering ─► ProposalsRegistrationEnded
//!             └─ StartVotingSession ─► VotingSessionStarted
//!                  └─ EndVotingSession ─► VotingSessionEnded
//!                       └─ TallyVotes ─► VotesTallied
//! ```

use soroban_sdk::contracttype;

/// Lifecycle phases of a poll. The discriminants are the status codes
/// carried by `wf_status` events.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Admin operations that move the workflow forward.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WorkflowAction {
    /// Rejected unless voters are still being registered
    StartProposalsRegistering,
    /// Rejected unless proposal registration has started
    EndProposalsRegistering,
    /// Rejected unless proposal registration is finished
    StartVotingSession,
    /// Rejected unless the voting session has started
    EndVotingSession,
    /// Rejected unless the voting session has ended
    TallyVotes,
}

impl WorkflowAction {
    /// The only status this action may be applied from.
    pub fn required_status(self) -> WorkflowStatus {
        match self {
            WorkflowAction::StartProposalsRegistering => WorkflowStatus::RegisteringVoters,
            WorkflowAction::EndProposalsRegistering => WorkflowStatus::ProposalsRegistrationStarted,
            WorkflowAction::StartVotingSession => WorkflowStatus::ProposalsRegistrationEnded,
            WorkflowAction::EndVotingSession => WorkflowStatus::VotingSessionStarted,
            WorkflowAction::TallyVotes => WorkflowStatus::VotingSessionEnded,
        }
    }

    /// The status reached once the action succeeds.
    pub fn target_status(self) -> WorkflowStatus {
        match self {
            WorkflowAction::StartProposalsRegistering => WorkflowStatus::ProposalsRegistrationStarted,
            WorkflowAction::EndProposalsRegistering => WorkflowStatus::ProposalsRegistrationEnded,
            WorkflowAction::StartVotingSession => WorkflowStatus::VotingSessionStarted,
            WorkflowAction::EndVotingSession => WorkflowStatus::VotingSessionEnded,
            WorkflowAction::TallyVotes => WorkflowStatus::VotesTallied,
        }
    }
}

impl WorkflowStatus {
    /// Applies `action` to the current status, returning the next status or
    /// `None` when the action is illegal from here.
    pub fn apply(self, action: WorkflowAction) -> Option<WorkflowStatus> {
        if self == action.required_status() {
            Some(action.target_status())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: [WorkflowStatus; 6] = [
        WorkflowStatus::RegisteringVoters,
        WorkflowStatus::ProposalsRegistrationStarted,
        WorkflowStatus::ProposalsRegistrationEnded,
        WorkflowStatus::VotingSessionStarted,
        WorkflowStatus::VotingSessionEnded,
        WorkflowStatus::VotesTallied,
    ];

    const ALL_ACTIONS: [WorkflowAction; 5] = [
        WorkflowAction::StartProposalsRegistering,
        WorkflowAction::EndProposalsRegistering,
        WorkflowAction::StartVotingSession,
        WorkflowAction::EndVotingSession,
        WorkflowAction::TallyVotes,
    ];

    #[test]
    fn test_status_codes() {
        for (code, status) in ALL_STATUSES.iter().enumerate() {
            assert_eq!(*status as u32, code as u32);
        }
    }

    #[test]
    fn test_each_action_legal_from_one_status_only() {
        for action in ALL_ACTIONS {
            for status in ALL_STATUSES {
                let result = status.apply(action);
                if status == action.required_status() {
                    assert_eq!(result, Some(action.target_status()));
                } else {
                    assert_eq!(result, None);
                }
            }
        }
    }

    #[test]
    fn test_actions_advance_exactly_one_step() {
        for action in ALL_ACTIONS {
            assert_eq!(
                action.target_status() as u32,
                action.required_status() as u32 + 1
            );
        }
    }

    #[test]
    fn test_walk_full_workflow() {
        let mut status = WorkflowStatus::RegisteringVoters;
        for action in ALL_ACTIONS {
            let next = status.apply(action).unwrap();
            assert!(next > status);
            status = next;
        }
        assert_eq!(status, WorkflowStatus::VotesTallied);

        // Nothing moves the poll past the tally.
        for action in ALL_ACTIONS {
            assert_eq!(status.apply(action), None);
        }
    }

    #[test]
    fn test_no_skips_or_backward_moves() {
        for from in ALL_STATUSES {
            for action in ALL_ACTIONS {
                if let Some(to) = from.apply(action) {
                    assert_eq!(to as u32, from as u32 + 1);
                }
            }
        }
    }
}

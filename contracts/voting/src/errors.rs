use authorization::AuthError;
use soroban_sdk::contracterror;

/// Errors returned by the voting contract.
///
/// Codes are part of the contract interface and must stay stable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller lacks the role the operation requires (admin or voter)
    NotAuthorized = 1,
    /// Operation attempted outside its workflow phase
    InvalidPhase = 2,
    /// Voter is already on the whitelist
    AlreadyRegistered = 3,
    /// Voter has already cast a vote
    AlreadyVoted = 4,
    /// Proposal description is empty or blank
    EmptyProposal = 5,
    /// Vote targets a proposal that does not exist
    ProposalNotFound = 6,
    /// Lookup index past the end of the proposal list
    IndexOutOfRange = 7,
    AlreadyInitialized = 8,
    NotInitialized = 9,
    /// Proposal description exceeds `MAX_DESCRIPTION_LEN`
    DescriptionTooLong = 10,
    Overflow = 11,
}

impl From<AuthError> for VotingError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized => VotingError::NotAuthorized,
            AuthError::NotInitialized => VotingError::NotInitialized,
            AuthError::AlreadyInitialized => VotingError::AlreadyInitialized,
        }
    }
}

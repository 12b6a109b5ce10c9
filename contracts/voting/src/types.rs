use soroban_sdk::{contracttype, Address, String};

/// Whitelist entry for one voter
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set
    pub voted_proposal_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

/// Storage keys
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Status,
    Voter(Address),
    ProposalCount,
    Proposal(u32),
    /// Proposal currently ahead while votes are being cast
    Leader,
    WinningProposal,
}

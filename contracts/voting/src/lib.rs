#![no_std]
//! Single-authority voting contract
//!
//! An administrator registers a whitelist of voters and walks the poll
//! through its phases: proposal registration, voting, tallying. Voters
//! submit proposals and cast one vote each; the proposal with the most
//! votes wins, ties going to the earliest proposal.
//!
//! One deployed contract is one poll.

mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod types;
mod validation;
mod workflow;

pub use constants::{GENESIS_DESCRIPTION, MAX_DESCRIPTION_LEN};
pub use contract::{VotingContract, VotingContractClient};
pub use errors::VotingError;
pub use types::{Proposal, Voter};
pub use workflow::{WorkflowAction, WorkflowStatus};

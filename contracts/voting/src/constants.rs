//! Poll-wide constants

/// Description of the proposal appended at index 0 when proposal
/// registration opens.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// Upper bound on a proposal description, in bytes.
pub const MAX_DESCRIPTION_LEN: u32 = 256;

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// At ~5s per ledger one day is 17,280 ledgers. Poll entries are kept alive
// for 30 days past their last write.
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const POLL_TTL_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;
pub const POLL_TTL_THRESHOLD: u32 = POLL_TTL_LEDGERS - DAY_IN_LEDGERS;

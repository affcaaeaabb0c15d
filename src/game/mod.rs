//! Round lifecycle
//!
//! The turn/round state machine and the choice of sides.

mod role;
mod round;

pub use role::Role;
pub use round::{HistoryEntry, Round, RoundError, RoundStatus};

//! Core signal types and pure transition logic.
//!
//! This module contains the pure functional core of the controller:
//! - Phases and their lamp projections
//! - The transition table for both sequences and the duration lookup
//! - Immutable phase change history
//!
//! Nothing in this module keeps time or performs I/O.

mod history;
mod phase;
mod sequence;

pub use history::{PhaseChange, PhaseHistory, Trigger, DEFAULT_HISTORY_CAPACITY};
pub use phase::{Lamps, Phase};
pub use sequence::{duration_for, next_phase, Sequence};

//! Read-only view of a controller for display layers.

use crate::core::{Lamps, Phase};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a display reads from a controller at one instant.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub phase: Phase,
    pub remaining_seconds: u64,
    pub running: bool,
    pub started: bool,
    pub lamps: Lamps,
}

impl fmt::Display for ControllerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match (self.started, self.running) {
            (false, _) => "idle",
            (true, true) => "running",
            (true, false) => "paused",
        };
        write!(
            f,
            "{} {:<8} {:>2}s {}",
            self.lamps, self.phase, self.remaining_seconds, status
        )
    }
}

//! Phase change history tracking.
//!
//! Provides immutable, bounded tracking of the phase changes a controller
//! has made. Times are simulated running time, never wall-clock.

use super::phase::Phase;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of changes kept by a [`PhaseHistory`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// What caused a phase change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Trigger {
    /// The countdown for the previous phase ran out.
    Timeout,
    /// An operator forced the change with `step`.
    Manual,
}

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use signal_controller::core::{Phase, PhaseChange, Trigger};
/// use std::time::Duration;
///
/// let change = PhaseChange {
///     from: Phase::Red,
///     to: Phase::RedAmber,
///     trigger: Trigger::Timeout,
///     at: Duration::from_secs(6),
/// };
/// assert_eq!(change.to, Phase::RedAmber);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PhaseChange {
    /// The phase being left
    pub from: Phase,
    /// The phase being entered
    pub to: Phase,
    /// Why the change happened
    pub trigger: Trigger,
    /// Simulated running time at which the change happened
    pub at: Duration,
}

/// Ordered, bounded history of phase changes.
///
/// History is immutable - `record` returns a new history with the change
/// added. Once `capacity` is reached the oldest change is dropped.
///
/// # Example
///
/// ```rust
/// use signal_controller::core::{Phase, PhaseChange, PhaseHistory, Trigger};
/// use std::time::Duration;
///
/// let history = PhaseHistory::new()
///     .record(PhaseChange {
///         from: Phase::Red,
///         to: Phase::Green,
///         trigger: Trigger::Timeout,
///         at: Duration::from_secs(6),
///     })
///     .record(PhaseChange {
///         from: Phase::Green,
///         to: Phase::Amber,
///         trigger: Trigger::Manual,
///         at: Duration::from_secs(8),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![Phase::Red, Phase::Green, Phase::Amber]);
/// assert_eq!(history.span(), Some(Duration::from_secs(2)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseHistory {
    changes: Vec<PhaseChange>,
    capacity: usize,
}

impl Default for PhaseHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseHistory {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_CAPACITY`] changes.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding up to `capacity` changes.
    ///
    /// A capacity of zero keeps nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            changes: Vec::new(),
            capacity,
        }
    }

    /// Record a change, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, change: PhaseChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        if changes.len() > self.capacity {
            let excess = changes.len() - self.capacity;
            changes.drain(..excess);
        }
        Self {
            changes,
            capacity: self.capacity,
        }
    }

    /// An empty history with the same capacity.
    pub fn cleared(&self) -> Self {
        Self::with_capacity(self.capacity)
    }

    /// Phases traversed: the first recorded `from`, then each `to`.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.first() {
            path.push(first.from);
        }
        path.extend(self.changes.iter().map(|c| c.to));
        path
    }

    /// Simulated time between the first and last retained change.
    pub fn span(&self) -> Option<Duration> {
        match (self.changes.first(), self.changes.last()) {
            (Some(first), Some(last)) => Some(last.at.saturating_sub(first.at)),
            _ => None,
        }
    }

    /// All retained changes, oldest first.
    pub fn changes(&self) -> &[PhaseChange] {
        &self.changes
    }

    /// The most recent change.
    pub fn last(&self) -> Option<&PhaseChange> {
        self.changes.last()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

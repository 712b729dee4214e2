//! Phase sequences and the pure transition table.
//!
//! Both functions here are stateless and total: every phase maps to a next
//! phase under either sequence, and every phase has a duration.

use super::phase::Phase;
use crate::config::SignalConfig;
use serde::{Deserialize, Serialize};

/// Which cycle the controller follows.
///
/// # Example
///
/// ```rust
/// use signal_controller::core::{next_phase, Phase, Sequence};
///
/// assert_eq!(next_phase(Phase::Red, Sequence::Uk), Phase::RedAmber);
/// assert_eq!(next_phase(Phase::Red, Sequence::Simple), Phase::Green);
/// assert_eq!(Sequence::from(true), Sequence::Uk);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sequence {
    /// Red, RedAmber, Green, Amber.
    #[default]
    Uk,
    /// Red, Green, Amber.
    Simple,
}

impl Sequence {
    /// Whether this is the four-phase UK cycle.
    pub fn is_uk(&self) -> bool {
        matches!(self, Self::Uk)
    }

    /// The phases of one cycle, starting from `Red`.
    pub fn phases(&self) -> &'static [Phase] {
        match self {
            Self::Uk => &[Phase::Red, Phase::RedAmber, Phase::Green, Phase::Amber],
            Self::Simple => &[Phase::Red, Phase::Green, Phase::Amber],
        }
    }

    /// Number of phases in one cycle.
    pub fn period(&self) -> usize {
        self.phases().len()
    }
}

impl From<bool> for Sequence {
    /// `true` selects the UK sequence.
    fn from(use_uk: bool) -> Self {
        if use_uk {
            Self::Uk
        } else {
            Self::Simple
        }
    }
}

impl From<Sequence> for bool {
    fn from(sequence: Sequence) -> Self {
        sequence.is_uk()
    }
}

/// The phase that follows `current` under `sequence`.
///
/// Under the simple sequence `RedAmber` is unreachable except as a leftover
/// from a live switch away from UK; it proceeds to `Green`.
pub fn next_phase(current: Phase, sequence: Sequence) -> Phase {
    match (sequence, current) {
        (Sequence::Uk, Phase::Red) => Phase::RedAmber,
        (Sequence::Uk, Phase::RedAmber) => Phase::Green,
        (Sequence::Simple, Phase::Red) => Phase::Green,
        (Sequence::Simple, Phase::RedAmber) => Phase::Green,
        (_, Phase::Green) => Phase::Amber,
        (_, Phase::Amber) => Phase::Red,
    }
}

/// How many seconds `phase` is held under `config`.
///
/// `RedAmber` is as brief as `Amber` and shares its setting. Values are
/// returned unvalidated; the controller tolerates non-positive durations.
pub fn duration_for(phase: Phase, config: &SignalConfig) -> i64 {
    match phase {
        Phase::Red => config.red_seconds,
        Phase::Green => config.green_seconds,
        Phase::Amber | Phase::RedAmber => config.amber_seconds,
    }
}

//! Signal phases and the lamps they energize.
//!
//! A [`Phase`] is a plain value describing which aspect the signal head is
//! showing. The lamp projections encode which physical lamps are lit in each
//! phase, so a display layer never has to derive that from the phase name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four aspects a signal head can show.
///
/// Exactly one phase is active at any time. There is no terminal phase:
/// a running controller cycles until it is paused or dropped.
///
/// # Example
///
/// ```rust
/// use signal_controller::core::Phase;
///
/// let phase = Phase::RedAmber;
/// assert_eq!(phase.name(), "RedAmber");
/// assert!(phase.red_on());
/// assert!(phase.amber_on());
/// assert!(!phase.green_on());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Phase {
    Red,
    RedAmber,
    Green,
    Amber,
}

impl Phase {
    /// Every phase, in UK cycle order starting from `Red`.
    pub const ALL: [Phase; 4] = [Phase::Red, Phase::RedAmber, Phase::Green, Phase::Amber];

    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::RedAmber => "RedAmber",
            Self::Green => "Green",
            Self::Amber => "Amber",
        }
    }

    /// Whether the red lamp is lit.
    pub fn red_on(&self) -> bool {
        matches!(self, Self::Red | Self::RedAmber)
    }

    /// Whether the amber lamp is lit.
    pub fn amber_on(&self) -> bool {
        matches!(self, Self::Amber | Self::RedAmber)
    }

    /// Whether the green lamp is lit.
    pub fn green_on(&self) -> bool {
        matches!(self, Self::Green)
    }

    /// All three lamp states at once.
    pub fn lamps(&self) -> Lamps {
        Lamps {
            red: self.red_on(),
            amber: self.amber_on(),
            green: self.green_on(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Which lamps of a three-aspect signal head are energized.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Lamps {
    pub red: bool,
    pub amber: bool,
    pub green: bool,
}

impl Lamps {
    /// Number of lamps currently lit.
    pub fn lit(&self) -> usize {
        [self.red, self.amber, self.green]
            .into_iter()
            .filter(|on| *on)
            .count()
    }
}

impl fmt::Display for Lamps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |on: bool, c: char| if on { c } else { '.' };
        write!(
            f,
            "[{}{}{}]",
            mark(self.red, 'R'),
            mark(self.amber, 'A'),
            mark(self.green, 'G')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_name_returns_correct_value() {
        assert_eq!(Phase::Red.name(), "Red");
        assert_eq!(Phase::RedAmber.name(), "RedAmber");
        assert_eq!(Phase::Green.name(), "Green");
        assert_eq!(Phase::Amber.name(), "Amber");
    }

    #[test]
    fn display_matches_name() {
        for phase in Phase::ALL {
            assert_eq!(phase.to_string(), phase.name());
        }
    }

    #[test]
    fn lamp_table_is_fixed() {
        assert_eq!(
            Phase::Red.lamps(),
            Lamps {
                red: true,
                amber: false,
                green: false
            }
        );
        assert_eq!(
            Phase::RedAmber.lamps(),
            Lamps {
                red: true,
                amber: true,
                green: false
            }
        );
        assert_eq!(
            Phase::Green.lamps(),
            Lamps {
                red: false,
                amber: false,
                green: true
            }
        );
        assert_eq!(
            Phase::Amber.lamps(),
            Lamps {
                red: false,
                amber: true,
                green: false
            }
        );
    }

    #[test]
    fn only_red_amber_lights_two_lamps() {
        for phase in Phase::ALL {
            let expected = if phase == Phase::RedAmber { 2 } else { 1 };
            assert_eq!(phase.lamps().lit(), expected, "{phase}");
        }
    }

    #[test]
    fn lamps_render_compactly() {
        assert_eq!(Phase::RedAmber.lamps().to_string(), "[RA.]");
        assert_eq!(Phase::Green.lamps().to_string(), "[..G]");
    }

    #[test]
    fn phase_serializes_correctly() {
        let phase = Phase::RedAmber;
        let json = serde_json::to_string(&phase).unwrap();
        assert_eq!(json, "\"RedAmber\"");
        let deserialized: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, deserialized);
    }
}

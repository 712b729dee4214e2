//! Signal timing configuration.
//!
//! The controller takes a [`SignalConfig`] on every call that needs timings
//! and never validates it. Validation belongs to whoever builds the value:
//! the helpers here accumulate every field problem with `Validation` so an
//! operator sees all mistakes at once, and [`parse_seconds_or`] implements the
//! lenient parse-with-default policy used by interactive hosts.

pub mod error;

pub use error::ConfigError;

use crate::core::Sequence;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Shortest accepted phase duration, in seconds.
pub const MIN_SECONDS: i64 = 1;
/// Longest accepted phase duration, in seconds.
pub const MAX_SECONDS: i64 = 60;

pub const DEFAULT_RED_SECONDS: i64 = 6;
pub const DEFAULT_GREEN_SECONDS: i64 = 6;
pub const DEFAULT_AMBER_SECONDS: i64 = 2;

/// Result of validating configuration input, carrying every error found.
pub type ConfigValidation<T> = Validation<T, NonEmptyVec<ConfigError>>;

/// Phase durations and the sequence to follow.
///
/// `RedAmber` has no setting of its own; it reuses `amber_seconds`.
///
/// # Example
///
/// ```rust
/// use signal_controller::config::SignalConfig;
/// use signal_controller::core::Sequence;
///
/// let config = SignalConfig::new(30, 25, 3, Sequence::Uk);
/// assert!(config.validate().is_success());
///
/// let config = SignalConfig::new(0, 25, 90, Sequence::Uk);
/// assert!(config.validate().is_failure());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub red_seconds: i64,
    pub green_seconds: i64,
    pub amber_seconds: i64,
    pub sequence: Sequence,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            red_seconds: DEFAULT_RED_SECONDS,
            green_seconds: DEFAULT_GREEN_SECONDS,
            amber_seconds: DEFAULT_AMBER_SECONDS,
            sequence: Sequence::Uk,
        }
    }
}

impl SignalConfig {
    pub fn new(red_seconds: i64, green_seconds: i64, amber_seconds: i64, sequence: Sequence) -> Self {
        Self {
            red_seconds,
            green_seconds,
            amber_seconds,
            sequence,
        }
    }

    /// Whether the four-phase UK sequence is selected.
    pub fn use_uk(&self) -> bool {
        self.sequence.is_uk()
    }

    /// Same timings with a different sequence.
    pub fn with_sequence(self, sequence: Sequence) -> Self {
        Self { sequence, ..self }
    }

    /// Check every duration against the accepted range.
    ///
    /// Returns `Validation::Success(self)` if all pass, otherwise a failure
    /// listing every out-of-range field.
    pub fn validate(&self) -> ConfigValidation<SignalConfig> {
        let checks = vec![
            check_range("Red", self.red_seconds),
            check_range("Green", self.green_seconds),
            check_range("Amber", self.amber_seconds),
        ];
        let config = *self;
        Validation::all_vec(checks).map(move |_| config)
    }

    /// Strictly parse operator-entered duration text.
    ///
    /// Every field is checked, so a form with three bad entries reports all
    /// three.
    pub fn from_fields(
        red: &str,
        green: &str,
        amber: &str,
        sequence: Sequence,
    ) -> ConfigValidation<SignalConfig> {
        let fields = vec![
            parse_field("Red", red),
            parse_field("Green", green),
            parse_field("Amber", amber),
        ];
        Validation::all_vec(fields).map(move |seconds| SignalConfig {
            red_seconds: seconds[0],
            green_seconds: seconds[1],
            amber_seconds: seconds[2],
            sequence,
        })
    }

    /// Parse operator-entered duration text, substituting defaults.
    ///
    /// Never fails: unparseable fields fall back to their default and parsed
    /// values are clamped into range. See [`parse_seconds_or`].
    pub fn from_fields_or_default(red: &str, green: &str, amber: &str, sequence: Sequence) -> Self {
        Self {
            red_seconds: parse_seconds_or(red, DEFAULT_RED_SECONDS),
            green_seconds: parse_seconds_or(green, DEFAULT_GREEN_SECONDS),
            amber_seconds: parse_seconds_or(amber, DEFAULT_AMBER_SECONDS),
            sequence,
        }
    }

    /// Decode a JSON document and validate it.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigValidation<SignalConfig> {
        match serde_json::from_str::<SignalConfig>(json) {
            Ok(config) => config.validate(),
            Err(e) => Validation::fail(ConfigError::Malformed(e.to_string())),
        }
    }
}

/// Lenient duration parse: trim, parse, default on failure, clamp to range.
///
/// Logs a warning whenever the input is not used as given.
pub fn parse_seconds_or(text: &str, default: i64) -> i64 {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => {
            let clamped = value.clamp(MIN_SECONDS, MAX_SECONDS);
            if clamped != value {
                tracing::warn!(value, clamped, "duration out of range, clamping");
            }
            clamped
        }
        Err(_) => {
            tracing::warn!(text = %trimmed, default, "unparseable duration, using default");
            default
        }
    }
}

fn check_range(phase: &'static str, value: i64) -> ConfigValidation<i64> {
    if (MIN_SECONDS..=MAX_SECONDS).contains(&value) {
        Validation::success(value)
    } else {
        Validation::fail(ConfigError::OutOfRange {
            phase,
            value,
            min: MIN_SECONDS,
            max: MAX_SECONDS,
        })
    }
}

fn parse_field(phase: &'static str, text: &str) -> ConfigValidation<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) => check_range(phase, value),
        Err(_) => Validation::fail(ConfigError::NotANumber {
            phase,
            text: text.trim().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SignalConfig::default();
        assert_eq!(config.red_seconds, 6);
        assert_eq!(config.green_seconds, 6);
        assert_eq!(config.amber_seconds, 2);
        assert!(config.use_uk());
        assert!(config.validate().is_success());
    }

    #[test]
    fn validate_accumulates_all_violations() {
        let config = SignalConfig::new(0, 61, -3, Sequence::Simple);

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ConfigError::OutOfRange { phase: "Green", value: 61, .. }
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validate_accepts_range_bounds() {
        assert!(SignalConfig::new(1, 60, 1, Sequence::Uk).validate().is_success());
    }

    #[test]
    fn from_fields_parses_trimmed_text() {
        match SignalConfig::from_fields(" 10", "20 ", "3", Sequence::Simple) {
            Validation::Success(config) => {
                assert_eq!(config, SignalConfig::new(10, 20, 3, Sequence::Simple));
            }
            Validation::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn from_fields_reports_every_bad_field() {
        match SignalConfig::from_fields("abc", "0", "", Sequence::Uk) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::NotANumber { phase: "Red", .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::OutOfRange { phase: "Green", .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::NotANumber { phase: "Amber", .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn lenient_parse_defaults_and_clamps() {
        assert_eq!(parse_seconds_or("12", 6), 12);
        assert_eq!(parse_seconds_or("  7 ", 6), 7);
        assert_eq!(parse_seconds_or("seven", 6), 6);
        assert_eq!(parse_seconds_or("", 2), 2);
        assert_eq!(parse_seconds_or("0", 6), 1);
        assert_eq!(parse_seconds_or("-5", 6), 1);
        assert_eq!(parse_seconds_or("600", 6), 60);
    }

    #[test]
    fn from_fields_or_default_never_fails() {
        let config = SignalConfig::from_fields_or_default("x", "99", "3", Sequence::Uk);
        assert_eq!(config, SignalConfig::new(6, 60, 3, Sequence::Uk));
    }

    #[test]
    fn from_json_fills_defaults() {
        match SignalConfig::from_json(r#"{"red_seconds": 20, "sequence": "simple"}"#) {
            Validation::Success(config) => {
                assert_eq!(config.red_seconds, 20);
                assert_eq!(config.green_seconds, DEFAULT_GREEN_SECONDS);
                assert_eq!(config.amber_seconds, DEFAULT_AMBER_SECONDS);
                assert_eq!(config.sequence, Sequence::Simple);
            }
            Validation::Failure(_) => panic!("Expected success"),
        }
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        match SignalConfig::from_json("{ not json") {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().all(|e| matches!(e, ConfigError::Malformed(_))));
            }
            Validation::Success(_) => panic!("Expected failure"),
        }
    }

    #[test]
    fn from_json_validates_ranges() {
        assert!(SignalConfig::from_json(r#"{"amber_seconds": 0}"#).is_failure());
    }

    #[test]
    fn errors_display_the_field() {
        let error = ConfigError::OutOfRange {
            phase: "Red",
            value: 0,
            min: 1,
            max: 60,
        };
        assert_eq!(
            error.to_string(),
            "Red duration 0s is outside 1..=60 seconds"
        );
    }
}

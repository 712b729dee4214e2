//! Signal Controller: a deterministic timed state machine for traffic signals
//!
//! The controller cycles a signal head through a fixed sequence of phases,
//! holding each for a configured number of seconds. It keeps no clock of its
//! own: the host feeds it elapsed time, which makes every run reproducible
//! and every test a matter of passing synthetic durations.
//!
//! # Core Concepts
//!
//! - **Phase**: `Red`, `RedAmber`, `Green` or `Amber`, with lamp projections
//! - **Sequence**: the four-phase UK cycle or the three-phase simple cycle
//! - **Controller**: countdown, sub-second carry, and the
//!   start/pause/resume/step/reset control surface
//! - **Driver**: an optional tokio heartbeat for headless hosts
//!
//! # Example
//!
//! ```rust
//! use signal_controller::{Controller, Phase, Sequence, SignalConfig};
//! use std::time::Duration;
//!
//! let config = SignalConfig::new(6, 6, 2, Sequence::Uk);
//! let mut controller = Controller::new();
//! controller.start(&config);
//!
//! // A host that was suspended for 6.5s catches up in one call.
//! controller.advance(Duration::from_millis(6500), &config);
//! assert_eq!(controller.phase(), Phase::RedAmber);
//! assert_eq!(controller.remaining_seconds(), 2);
//! assert_eq!(controller.carry(), Duration::from_millis(500));
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod driver;

// Re-export commonly used types
pub use crate::config::{ConfigError, SignalConfig};
pub use crate::controller::{Controller, ControllerSnapshot};
pub use crate::core::{duration_for, next_phase, Lamps, Phase, PhaseHistory, Sequence};

//! Headless heartbeat for a [`Controller`].
//!
//! Interactive hosts drive the controller from their own UI timer. This
//! module is the equivalent for hosts without one: a tokio interval that
//! measures the real time between ticks and feeds it to `advance`.

use crate::config::SignalConfig;
use crate::controller::{Controller, ControllerSnapshot};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{Instant, MissedTickBehavior};

/// Tick cadence used by interactive hosts; smooth enough for a countdown display.
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(250);

/// Errors from starting the driver loop.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DriveError {
    #[error("Tick cadence must be greater than zero")]
    ZeroCadence,
}

/// What a driver run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriveSummary {
    /// Heartbeats delivered to the controller
    pub ticks: u64,
    /// Phase changes those heartbeats caused
    pub transitions: usize,
}

/// Drive `controller` every `cadence` until `shutdown` resolves.
///
/// Each tick reads a fresh configuration from `config`, advances the
/// controller by the time measured since the previous tick, and hands the
/// resulting snapshot to `observe`. Late ticks are not bunched up; the
/// measured delta still covers the gap, so the controller catches up.
pub async fn run<C, O, S>(
    controller: &mut Controller,
    cadence: Duration,
    mut config: C,
    mut observe: O,
    shutdown: S,
) -> Result<DriveSummary, DriveError>
where
    C: FnMut() -> SignalConfig,
    O: FnMut(&ControllerSnapshot),
    S: Future<Output = ()>,
{
    if cadence.is_zero() {
        return Err(DriveError::ZeroCadence);
    }

    let mut interval = tokio::time::interval(cadence);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut summary = DriveSummary::default();
    let mut last = Instant::now();
    tracing::debug!(?cadence, "driver started");

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = interval.tick() => {
                let now = Instant::now();
                let delta = now.saturating_duration_since(last);
                last = now;

                let fired = controller.advance(delta, &config());
                summary.ticks += 1;
                summary.transitions += fired;
                observe(&controller.snapshot());
            }
        }
    }

    tracing::debug!(
        ticks = summary.ticks,
        transitions = summary.transitions,
        "driver stopped"
    );
    Ok(summary)
}

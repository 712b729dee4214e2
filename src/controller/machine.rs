//! The timed signal controller.

use crate::config::SignalConfig;
use crate::controller::snapshot::ControllerSnapshot;
use crate::core::{duration_for, next_phase, Phase, PhaseChange, PhaseHistory, Trigger};
use std::time::Duration;

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Signal controller driven by caller-supplied elapsed time.
///
/// The controller owns no timer. A host calls [`advance`](Self::advance)
/// with the real time elapsed since its last call, passing the current
/// configuration each time so timings can change while running.
///
/// # Example
///
/// ```rust
/// use signal_controller::config::SignalConfig;
/// use signal_controller::controller::Controller;
/// use signal_controller::core::{Phase, Sequence};
/// use std::time::Duration;
///
/// let config = SignalConfig::new(6, 6, 2, Sequence::Uk);
/// let mut controller = Controller::new();
/// controller.start(&config);
///
/// for _ in 0..6 {
///     controller.advance(Duration::from_millis(1000), &config);
/// }
///
/// assert_eq!(controller.phase(), Phase::RedAmber);
/// assert_eq!(controller.remaining_seconds(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Controller {
    phase: Phase,
    remaining: i64,
    running: bool,
    started: bool,
    carry: Duration,
    elapsed: Duration,
    history: PhaseHistory,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Create an untouched controller: `Red`, nothing remaining, not started.
    pub fn new() -> Self {
        Self::with_history(PhaseHistory::new())
    }

    /// Create an untouched controller recording into `history`.
    pub fn with_history(history: PhaseHistory) -> Self {
        Self {
            phase: Phase::Red,
            remaining: 0,
            running: false,
            started: false,
            carry: Duration::ZERO,
            elapsed: Duration::ZERO,
            history: history.cleared(),
        }
    }

    /// Current phase (pure)
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whole seconds left in the current phase, never negative (pure)
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining.max(0) as u64
    }

    /// Whether `advance` is consuming time (pure)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the controller has left its untouched state (pure)
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Sub-second time not yet counted down, always under one second (pure)
    pub fn carry(&self) -> Duration {
        self.carry
    }

    /// Total time consumed while running since the last start or reset (pure)
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Phase change history (pure)
    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    pub fn red_on(&self) -> bool {
        self.phase.red_on()
    }

    pub fn amber_on(&self) -> bool {
        self.phase.amber_on()
    }

    pub fn green_on(&self) -> bool {
        self.phase.green_on()
    }

    /// Everything a display needs, in one value (pure)
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            phase: self.phase,
            remaining_seconds: self.remaining_seconds(),
            running: self.running,
            started: self.started,
            lamps: self.phase.lamps(),
        }
    }

    /// Begin a fresh cycle from `Red` and start consuming time.
    ///
    /// Calling this while running restarts the cycle.
    pub fn start(&mut self, config: &SignalConfig) {
        self.restart_at_red(config);
        self.running = true;
        self.started = true;
        tracing::info!(
            remaining = self.remaining,
            sequence = ?config.sequence,
            "controller started"
        );
    }

    /// Stop consuming time. The countdown position is kept exactly.
    pub fn pause(&mut self) {
        if self.running {
            tracing::debug!(phase = %self.phase, remaining = self.remaining, "controller paused");
        }
        self.running = false;
    }

    /// Continue from where `pause` left off.
    ///
    /// Does nothing if the controller was never started.
    pub fn resume(&mut self) {
        if !self.started {
            tracing::trace!("resume ignored, controller never started");
            return;
        }
        if !self.running {
            tracing::debug!(phase = %self.phase, remaining = self.remaining, "controller resumed");
        }
        self.running = true;
    }

    /// Force exactly one transition, whether running or not.
    ///
    /// Marks the controller started but leaves the running flag alone.
    pub fn step(&mut self, config: &SignalConfig) {
        self.started = true;
        self.carry = Duration::ZERO;
        self.transition(config, Trigger::Manual, self.elapsed);
    }

    /// Return to the untouched state, with `Red`'s duration loaded.
    pub fn reset(&mut self, config: &SignalConfig) {
        self.restart_at_red(config);
        self.running = false;
        self.started = false;
        tracing::info!(remaining = self.remaining, "controller reset");
    }

    /// Consume `elapsed` time, counting down whole seconds.
    ///
    /// While paused the delta is dropped. Otherwise every whole second
    /// accumulated decrements the countdown, and each time it reaches zero
    /// the controller moves to the next phase. A large delta fires as many
    /// transitions as it spans. Returns the number of transitions fired.
    pub fn advance(&mut self, elapsed: Duration, config: &SignalConfig) -> usize {
        if !self.running {
            tracing::trace!(?elapsed, "dropping delta while paused");
            return 0;
        }

        // Running time of the last whole-second tick.
        let mut tick_at = self.elapsed.saturating_sub(self.carry);
        self.elapsed = self.elapsed.saturating_add(elapsed);
        let total = self.carry.saturating_add(elapsed);
        let mut whole = total.as_secs();
        self.carry = total - Duration::from_secs(whole);

        let mut fired = 0;
        while whole > 0 {
            // Decrements until the countdown reaches zero; a non-positive
            // countdown still needs one.
            let until_change = self.remaining.max(1) as u64;
            if whole < until_change {
                self.remaining -= whole as i64;
                break;
            }
            whole -= until_change;
            tick_at = tick_at.saturating_add(Duration::from_secs(until_change));
            self.transition(config, Trigger::Timeout, tick_at);
            fired += 1;
        }

        debug_assert!(self.carry < ONE_SECOND);
        fired
    }

    fn restart_at_red(&mut self, config: &SignalConfig) {
        self.phase = Phase::Red;
        self.remaining = duration_for(Phase::Red, config);
        self.carry = Duration::ZERO;
        self.elapsed = Duration::ZERO;
        self.history = self.history.cleared();
    }

    fn transition(&mut self, config: &SignalConfig, trigger: Trigger, at: Duration) {
        let from = self.phase;
        let to = next_phase(from, config.sequence);
        self.phase = to;
        self.remaining = duration_for(to, config);
        self.history = self.history.record(PhaseChange {
            from,
            to,
            trigger,
            at,
        });
        tracing::debug!(
            %from,
            %to,
            ?trigger,
            remaining = self.remaining,
            lamps = %to.lamps(),
            "phase change"
        );
    }
}

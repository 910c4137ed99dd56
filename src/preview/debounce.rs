//! Debounce state machine for preview updates.
//!
//! Time is injected as [`Instant`] on every call, so the machine is driven
//! by the host's event loop and is deterministic under test.

use std::time::{Duration, Instant};

/// Default quiet period before a burst of changes is applied.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(100);
/// Default upper bound on how long a burst may keep re-arming the timer.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_millis(500);

/// Debounce timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// Quiet period after the last change
    pub window: Duration,
    /// Forced flush this long after the first change of a burst
    pub max_wait: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }
}

/// Externally visible phase of the debouncer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing to apply
    Idle,
    /// A change is waiting for the timer
    Pending,
    /// An apply pass is running
    Applying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Pending {
        first_change: Instant,
        last_change: Instant,
    },
    Applying {
        /// Arrival time of the first change recorded during the pass.
        queued: Option<Instant>,
    },
}

/// Idle/Pending/Applying state machine with a max-wait flush.
///
/// # Usage
///
/// Call [`schedule`](Debouncer::schedule) on every change and
/// [`poll`](Debouncer::poll) from the event loop. When `poll` returns `true`
/// the machine is in [`Phase::Applying`]; run the pass and then call
/// [`finish`](Debouncer::finish). Changes scheduled during the pass are
/// remembered and put the machine back into [`Phase::Pending`] on finish.
#[derive(Debug, Clone)]
pub struct Debouncer {
    config: DebounceConfig,
    state: State,
}

impl Debouncer {
    /// Creates an idle debouncer.
    #[must_use]
    pub const fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            state: State::Idle,
        }
    }

    /// Records a change at `now`, arming or re-arming the timer.
    pub fn schedule(&mut self, now: Instant) {
        self.state = match self.state {
            State::Idle => State::Pending {
                first_change: now,
                last_change: now,
            },
            State::Pending { first_change, .. } => State::Pending {
                first_change,
                last_change: now,
            },
            State::Applying { queued } => State::Applying {
                queued: Some(queued.unwrap_or(now)),
            },
        };
    }

    /// When the pending burst becomes due, if one is pending.
    ///
    /// This is the earlier of the quiet-period expiry and the max-wait bound.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            State::Pending {
                first_change,
                last_change,
            } => Some((last_change + self.config.window).min(first_change + self.config.max_wait)),
            State::Idle | State::Applying { .. } => None,
        }
    }

    /// Moves Pending to Applying once the deadline has passed.
    ///
    /// Returns `true` when the caller should run an apply pass now.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.state = State::Applying { queued: None };
                true
            }
            _ => false,
        }
    }

    /// Enters Applying immediately, whatever the current phase.
    ///
    /// Used for explicit flushes. Returns `false` if a pass is already
    /// running, in which case the state is left untouched.
    pub fn begin(&mut self) -> bool {
        if matches!(self.state, State::Applying { .. }) {
            return false;
        }
        self.state = State::Applying { queued: None };
        true
    }

    /// Ends the running pass.
    ///
    /// With no changes recorded during the pass the machine goes Idle;
    /// otherwise it goes back to Pending with the timer re-armed at `now`.
    pub fn finish(&mut self, now: Instant) {
        self.state = match self.state {
            State::Applying {
                queued: Some(first_change),
            } => State::Pending {
                first_change,
                last_change: now,
            },
            State::Applying { queued: None } => State::Idle,
            other => other,
        };
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Pending { .. } => Phase::Pending,
            State::Applying { .. } => Phase::Applying,
        }
    }

    /// When the current burst started, if one is pending.
    #[must_use]
    pub const fn burst_started(&self) -> Option<Instant> {
        match self.state {
            State::Pending { first_change, .. } => Some(first_change),
            _ => None,
        }
    }

    /// Timing configuration.
    #[must_use]
    pub const fn config(&self) -> &DebounceConfig {
        &self.config
    }

    /// Replaces the timing configuration; a pending burst keeps its timestamps.
    pub fn set_config(&mut self, config: DebounceConfig) {
        self.config = config;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DebounceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_idle_until_scheduled() {
        let mut d = Debouncer::default();
        let t0 = Instant::now();

        assert_eq!(d.phase(), Phase::Idle);
        assert_eq!(d.deadline(), None);
        assert!(!d.poll(t0 + MS * 1000));
    }

    #[test]
    fn test_fires_after_quiet_window() {
        let mut d = Debouncer::default();
        let t0 = Instant::now();
        d.schedule(t0);

        assert_eq!(d.phase(), Phase::Pending);
        assert_eq!(d.deadline(), Some(t0 + MS * 100));
        assert!(!d.poll(t0 + MS * 99));
        assert!(d.poll(t0 + MS * 100));
        assert_eq!(d.phase(), Phase::Applying);

        d.finish(t0 + MS * 101);
        assert_eq!(d.phase(), Phase::Idle);
    }

    #[test]
    fn test_rearm_on_each_change() {
        let mut d = Debouncer::default();
        let t0 = Instant::now();
        d.schedule(t0);
        d.schedule(t0 + MS * 60);

        assert!(!d.poll(t0 + MS * 120));
        assert!(d.poll(t0 + MS * 160));
    }

    #[test]
    fn test_max_wait_forces_flush() {
        let mut d = Debouncer::default();
        let t0 = Instant::now();

        // A change every 50ms never leaves a 100ms quiet period
        let mut fired_at = None;
        for step in 0..20_u32 {
            let now = t0 + MS * (step * 50);
            if d.poll(now) {
                fired_at = Some(now);
                break;
            }
            d.schedule(now);
        }

        assert_eq!(fired_at, Some(t0 + MS * 500));
    }

    #[test]
    fn test_change_during_apply_returns_to_pending() {
        let mut d = Debouncer::default();
        let t0 = Instant::now();
        d.schedule(t0);
        assert!(d.poll(t0 + MS * 100));

        d.schedule(t0 + MS * 110);
        assert_eq!(d.phase(), Phase::Applying);
        assert!(!d.poll(t0 + MS * 500));

        d.finish(t0 + MS * 120);
        assert_eq!(d.phase(), Phase::Pending);
        assert_eq!(d.burst_started(), Some(t0 + MS * 110));
        assert_eq!(d.deadline(), Some(t0 + MS * 220));
    }

    #[test]
    fn test_begin_is_refused_while_applying() {
        let mut d = Debouncer::default();
        let t0 = Instant::now();

        assert!(d.begin());
        assert!(!d.begin());
        d.finish(t0);
        assert_eq!(d.phase(), Phase::Idle);
    }
}

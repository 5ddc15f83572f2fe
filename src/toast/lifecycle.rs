// SPDX-License-Identifier: MPL-2.0
//! Per-toast timers and state machine.
//!
//! Each visible toast owns a [`ToastLifecycle`]. It never touches the
//! registry itself: the surface polls it with the current time and removes
//! the record when the lifecycle says so.
//!
//! All methods take `now` explicitly so the machine can be driven by a UI
//! tick in production and by fixed instants in tests.

use super::request::LoadingOutcome;
use super::types::Variant;
use crate::config::defaults::EXIT_ANIMATION_MS;
use std::time::{Duration, Instant};

/// How long the exit animation runs before the record is removed.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(EXIT_ANIMATION_MS);

/// Auto-dismiss countdown that can be paused and resumed.
///
/// Pausing stores what is left; resuming re-arms for exactly that, never
/// for the full duration again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Countdown {
    #[default]
    Disarmed,
    Running {
        remaining: Duration,
        armed_at: Instant,
    },
    Paused {
        remaining: Duration,
    },
    Elapsed,
}

impl Countdown {
    #[must_use]
    pub fn armed(duration: Duration, now: Instant) -> Self {
        Countdown::Running {
            remaining: duration,
            armed_at: now,
        }
    }

    pub fn pause(&mut self, now: Instant) {
        if let Countdown::Running {
            remaining,
            armed_at,
        } = *self
        {
            let elapsed = now.saturating_duration_since(armed_at);
            *self = Countdown::Paused {
                remaining: remaining.saturating_sub(elapsed),
            };
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if let Countdown::Paused { remaining } = *self {
            *self = Countdown::Running {
                remaining,
                armed_at: now,
            };
        }
    }

    /// Time left before expiry, if the countdown is armed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match *self {
            Countdown::Running {
                remaining,
                armed_at,
            } => Some(remaining.saturating_sub(now.saturating_duration_since(armed_at))),
            Countdown::Paused { remaining } => Some(remaining),
            Countdown::Elapsed => Some(Duration::ZERO),
            Countdown::Disarmed => None,
        }
    }

    /// Returns `true` exactly once, on the first poll past the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if let Countdown::Running { .. } = self {
            if self.remaining(now) == Some(Duration::ZERO) {
                *self = Countdown::Elapsed;
                return true;
            }
        }
        false
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self, Countdown::Paused { .. })
    }
}

/// Visible → Exiting → Removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Exiting { until: Instant },
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Success,
    Error,
}

/// Sub-state of a loading toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    Pending,
    Resolved(Resolution),
}

/// Reasons that keep the countdown paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Holds {
    hover: bool,
    focus: bool,
    loading: bool,
}

impl Holds {
    fn any(self) -> bool {
        self.hover || self.focus || self.loading
    }
}

/// Result of asking a toast to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStep {
    /// The exit animation started; removal happens on a later tick.
    Animating,
    /// No animation; remove the record now.
    RemoveNow,
    /// The toast was already leaving.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastLifecycle {
    phase: Phase,
    countdown: Countdown,
    holds: Holds,
    loading: Option<LoadingState>,
    /// Bumped on every loading (re)start; outcomes of older runs are stale.
    loading_generation: u64,
}

impl ToastLifecycle {
    /// Starts the lifecycle of a freshly mounted toast.
    ///
    /// A zero `delay` never arms the countdown. A loading toast starts with
    /// its countdown held until the computation settles.
    #[must_use]
    pub fn mount(delay: Duration, loading: bool, now: Instant) -> Self {
        let mut lifecycle = Self {
            phase: Phase::Visible,
            countdown: Countdown::Disarmed,
            holds: Holds::default(),
            loading: None,
            loading_generation: 0,
        };
        lifecycle.rearm(delay, now);
        if loading {
            lifecycle.restart_loading(now);
        }
        lifecycle
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    #[must_use]
    pub fn loading(&self) -> Option<LoadingState> {
        self.loading
    }

    /// Generation of the current loading run.
    #[must_use]
    pub fn loading_generation(&self) -> u64 {
        self.loading_generation
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.loading == Some(LoadingState::Pending)
    }

    /// Arms the countdown afresh for `delay`, respecting active holds.
    pub fn rearm(&mut self, delay: Duration, now: Instant) {
        self.countdown = if delay.is_zero() {
            Countdown::Disarmed
        } else {
            Countdown::armed(delay, now)
        };
        if self.holds.any() {
            self.countdown.pause(now);
        }
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        self.holds.hover = hovered;
        self.sync_holds(now);
    }

    pub fn set_focused(&mut self, focused: bool, now: Instant) {
        self.holds.focus = focused;
        self.sync_holds(now);
    }

    /// Puts the toast back into the pending loading sub-state, starting a
    /// new loading generation.
    pub fn restart_loading(&mut self, now: Instant) {
        self.loading_generation += 1;
        self.loading = Some(LoadingState::Pending);
        self.holds.loading = true;
        self.sync_holds(now);
    }

    /// Drops the loading sub-state, e.g. after an update changed the variant.
    pub fn clear_loading(&mut self, now: Instant) {
        self.loading = None;
        self.holds.loading = false;
        self.sync_holds(now);
    }

    /// Settles a pending loading toast.
    ///
    /// With `auto_dismiss` the countdown is re-armed for the full `delay`;
    /// otherwise the toast stays until it is closed. Returns `false` if the
    /// toast was not pending.
    pub fn resolve(
        &mut self,
        outcome: &LoadingOutcome,
        auto_dismiss: bool,
        delay: Duration,
        now: Instant,
    ) -> bool {
        if !self.is_pending() {
            return false;
        }
        let resolution = match outcome {
            LoadingOutcome::Success => Resolution::Success,
            LoadingOutcome::Failure(_) => Resolution::Error,
        };
        self.loading = Some(LoadingState::Resolved(resolution));
        self.holds.loading = false;
        if auto_dismiss {
            self.rearm(delay, now);
        } else {
            self.countdown = Countdown::Disarmed;
        }
        true
    }

    /// Starts closing the toast (close button or countdown expiry).
    pub fn begin_exit(&mut self, now: Instant, reduced_motion: bool) -> ExitStep {
        if self.phase != Phase::Visible {
            return ExitStep::Ignored;
        }
        if reduced_motion {
            self.phase = Phase::Removed;
            ExitStep::RemoveNow
        } else {
            self.phase = Phase::Exiting {
                until: now + EXIT_ANIMATION,
            };
            ExitStep::Animating
        }
    }

    /// Advances timers. Returns `true` when the record should be removed.
    pub fn tick(&mut self, now: Instant, reduced_motion: bool) -> bool {
        match self.phase {
            Phase::Visible => {
                self.countdown.poll(now)
                    && self.begin_exit(now, reduced_motion) == ExitStep::RemoveNow
            }
            Phase::Exiting { until } => {
                if now >= until {
                    self.phase = Phase::Removed;
                    true
                } else {
                    false
                }
            }
            Phase::Removed => true,
        }
    }

    /// Variant currently shown: a settled loading toast shows its outcome.
    #[must_use]
    pub fn status(&self, variant: Option<Variant>) -> Option<Variant> {
        match self.loading {
            Some(LoadingState::Resolved(Resolution::Success)) => Some(Variant::Success),
            Some(LoadingState::Resolved(Resolution::Error)) => Some(Variant::Error),
            _ => variant,
        }
    }

    fn sync_holds(&mut self, now: Instant) {
        if self.holds.any() {
            self.countdown.pause(now);
        } else {
            self.countdown.resume(now);
        }
    }
}

//! Countdown timer bound to the active step.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a [`StepTimer`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    /// Not ticking; may hold any remaining time
    Idle,
    /// Ticking down once per interval
    Running,
    /// Reached zero by ticking; stays here until reseeded
    Expired,
}

/// Result of delivering one tick to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick was dropped (timer not running, or the tick came from a
    /// cancelled tick source)
    Ignored,
    /// One second was taken off the countdown
    Ticked { remaining_sec: u32 },
    /// The countdown just hit zero
    Expired,
}

/// A single countdown.
///
/// `is_running` is never true while `remaining_sec` is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepTimer {
    duration_sec: u32,
    remaining_sec: u32,
    is_running: bool,
    expired: bool,
}

impl StepTimer {
    /// Creates a timer seeded with `duration_sec`.
    pub fn new(duration_sec: Option<u32>) -> Self {
        let mut timer = Self::default();
        timer.seed(duration_sec);
        timer
    }

    /// Loads a new countdown and stops the timer.
    pub fn seed(&mut self, duration_sec: Option<u32>) {
        self.duration_sec = duration_sec.unwrap_or(0);
        self.remaining_sec = self.duration_sec;
        self.is_running = false;
        self.expired = false;
    }

    /// Flips between running and paused. Returns the new running state.
    ///
    /// Does nothing when no time remains.
    pub fn toggle(&mut self) -> bool {
        if self.remaining_sec == 0 {
            return false;
        }
        self.is_running = !self.is_running;
        self.is_running
    }

    /// Stops the timer, keeping whatever time is left.
    pub fn stop(&mut self) {
        self.is_running = false;
    }

    /// Stops the timer and restores the seeded duration.
    pub fn reset(&mut self) {
        let duration = self.duration_sec;
        self.seed(Some(duration));
    }

    /// Takes one second off a running countdown.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Ignored;
        }

        self.remaining_sec = self.remaining_sec.saturating_sub(1);
        if self.remaining_sec == 0 {
            self.is_running = false;
            self.expired = true;
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked {
                remaining_sec: self.remaining_sec,
            }
        }
    }

    pub fn remaining_sec(&self) -> u32 {
        self.remaining_sec
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn phase(&self) -> TimerPhase {
        if self.is_running {
            TimerPhase::Running
        } else if self.expired {
            TimerPhase::Expired
        } else {
            TimerPhase::Idle
        }
    }

    /// Remaining time as `MM:SS`.
    pub fn formatted_time(&self) -> String {
        Clock(self.remaining_sec).to_string()
    }
}

/// Seconds formatted as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours, so 3661 seconds reads `61:01`.
///
/// ```rust
/// use sous_core::session::Clock;
///
/// assert_eq!(Clock(90).to_string(), "01:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock(pub u32);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

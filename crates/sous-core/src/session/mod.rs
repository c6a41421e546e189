//! Cooking session state machine.
//!
//! A [`CookingSession`] walks the cook through a recipe's steps one at a time.
//! It owns three pieces of state that always move together:
//!
//! - the sorted step sequence and the current position in it,
//! - a [`StepTimer`] seeded from the current step's duration,
//! - a [`CompletionTracker`] of the steps already passed.
//!
//! Every operation is a synchronous in-memory transition that cannot fail.
//! Requests that make no sense in the current state (advancing past the last
//! step, starting an expired timer, navigating an empty recipe) are ignored.
//!
//! # Tick generations
//!
//! The session does not own a clock. Ticks are delivered from outside through
//! [`CookingSession::tick`], tagged with the generation that was current when
//! the tick source was started. Every transition that stops or starts the
//! timer bumps the generation, so a tick from a cancelled source is dropped
//! even if it arrives late.
//!
//! ```rust
//! use sous_core::{models::Step, session::CookingSession};
//!
//! let mut session = CookingSession::new(vec![
//!     Step::timed(2, "Simmer", 90),
//!     Step::new(1, "Chop"),
//! ]);
//!
//! assert_eq!(session.current_step().unwrap().description, "Chop");
//! session.next();
//! assert_eq!(session.timer().remaining_sec(), 90);
//! assert!(session.completion().has(0));
//! ```

pub mod completion;
pub mod timer;


use log::debug;

pub use completion::CompletionTracker;
pub use timer::{Clock, StepTimer, TickOutcome, TimerPhase};

use crate::models::Step;

/// Returned by [`CookingSession::finalize`] to tell the caller the walk-through
/// is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionExit {
    pub completed_steps: usize,
    pub total_steps: usize,
}

/// In-memory state for one walk-through of a recipe.
#[derive(Debug, Clone)]
pub struct CookingSession {
    steps: Vec<Step>,
    current_index: usize,
    timer: StepTimer,
    completed: CompletionTracker,
    generation: u64,
}

impl CookingSession {
    /// Starts a session at the first step.
    ///
    /// Steps are sorted by `order`; the input may come in any order.
    pub fn new(mut steps: Vec<Step>) -> Self {
        steps.sort_by_key(|step| step.order);
        let timer = StepTimer::new(steps.first().and_then(|step| step.duration_sec));

        debug!("Cooking session initialized with {} steps", steps.len());

        Self {
            steps,
            current_index: 0,
            timer,
            completed: CompletionTracker::new(),
            generation: 0,
        }
    }

    /// Replaces the whole session with a fresh one for `steps`.
    ///
    /// This is the only way completed steps are cleared. Ticks from any
    /// source started before the call are ignored afterwards.
    pub fn initialize(&mut self, steps: Vec<Step>) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::new(steps);
        self.generation = generation;
    }

    /// Advances to the following step, marking the current one complete.
    ///
    /// Returns false (and changes nothing) on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last_step() {
            return false;
        }

        self.completed.mark_complete(self.current_index);
        self.current_index += 1;
        self.seed_current();

        debug!("Advanced to step {}/{}", self.current_index + 1, self.steps.len());
        true
    }

    /// Goes back one step. Completion marks are left as they are.
    ///
    /// Returns false (and changes nothing) on the first step.
    pub fn previous(&mut self) -> bool {
        if self.is_first_step() {
            return false;
        }

        self.current_index -= 1;
        self.seed_current();

        debug!("Went back to step {}/{}", self.current_index + 1, self.steps.len());
        true
    }

    /// Starts or pauses the countdown. Returns the new running state.
    ///
    /// Ignored when the timer has no time left.
    pub fn toggle_timer(&mut self) -> bool {
        let was_running = self.timer.is_running();
        let running = self.timer.toggle();
        if running != was_running {
            self.bump_generation();
            debug!(
                "Timer {} at {}",
                if running { "started" } else { "paused" },
                self.timer.formatted_time()
            );
        }
        running
    }

    /// Stops the countdown and restores the current step's full duration.
    pub fn reset_timer(&mut self) {
        self.seed_current();
        debug!("Timer reset to {}", self.timer.formatted_time());
    }

    /// Marks the current step complete and stops the timer.
    ///
    /// Returns `None` for an empty session.
    pub fn finalize(&mut self) -> Option<SessionExit> {
        if self.steps.is_empty() {
            return None;
        }

        self.completed.mark_complete(self.current_index);
        self.timer.stop();
        self.bump_generation();

        let exit = SessionExit {
            completed_steps: self.completed.len(),
            total_steps: self.steps.len(),
        };
        debug!(
            "Session finalized with {}/{} steps complete",
            exit.completed_steps, exit.total_steps
        );
        Some(exit)
    }

    /// Delivers one tick from the tick source started at `generation`.
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation {
            return TickOutcome::Ignored;
        }

        let outcome = self.timer.tick();
        if outcome == TickOutcome::Expired {
            self.bump_generation();
        }
        outcome
    }

    /// Generation a newly started tick source should carry.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The step on screen, or `None` when the recipe has no steps.
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.current_index)
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// True at index 0, and for an empty session.
    pub fn is_first_step(&self) -> bool {
        self.current_index == 0
    }

    /// True on the final index, and for an empty session.
    pub fn is_last_step(&self) -> bool {
        self.current_index + 1 >= self.steps.len()
    }

    pub fn all_steps_completed(&self) -> bool {
        self.completed.all_complete(self.steps.len())
    }

    pub fn timer(&self) -> &StepTimer {
        &self.timer
    }

    pub fn completion(&self) -> &CompletionTracker {
        &self.completed
    }

    fn seed_current(&mut self) {
        let duration = self.current_step().and_then(|step| step.duration_sec);
        self.timer.seed(duration);
        self.bump_generation();
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

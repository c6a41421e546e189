//! View-model snapshot of a cooking session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    models::{Step, StepMark},
    session::{CookingSession, TimerPhase},
};

/// Everything a cooking screen needs to render, copied out of the session.
///
/// A snapshot with no `current_step` means the recipe is not ready (it has no
/// steps); that is a display state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CookingView {
    pub recipe_title: Option<String>,
    pub steps: Vec<Step>,
    pub current_step: Option<Step>,
    pub current_step_index: usize,
    pub total_steps: usize,
    pub is_timer_running: bool,
    pub timer_phase: TimerPhase,
    pub remaining_sec: u32,
    pub formatted_time: String,
    pub completed_steps: BTreeSet<usize>,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub all_steps_completed: bool,
}

impl CookingView {
    pub fn from_session(recipe_title: Option<&str>, session: &CookingSession) -> Self {
        let timer = session.timer();
        Self {
            recipe_title: recipe_title.map(String::from),
            steps: session.steps().to_vec(),
            current_step: session.current_step().cloned(),
            current_step_index: session.current_index(),
            total_steps: session.total_steps(),
            is_timer_running: timer.is_running(),
            timer_phase: timer.phase(),
            remaining_sec: timer.remaining_sec(),
            formatted_time: timer.formatted_time(),
            completed_steps: session.completion().to_set(),
            is_first_step: session.is_first_step(),
            is_last_step: session.is_last_step(),
            all_steps_completed: session.all_steps_completed(),
        }
    }

    /// Whether there is a step to show.
    pub fn is_ready(&self) -> bool {
        self.current_step.is_some()
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed_steps.contains(&index)
    }

    /// Progress marker for the step at `index`.
    pub fn mark(&self, index: usize) -> StepMark {
        if self.is_completed(index) {
            StepMark::Done
        } else if index == self.current_step_index {
            StepMark::Current
        } else {
            StepMark::Todo
        }
    }
}

impl From<&CookingSession> for CookingView {
    fn from(session: &CookingSession) -> Self {
        Self::from_session(None, session)
    }
}

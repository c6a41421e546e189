//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

/// One instruction in a recipe's preparation sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Position of the step within the recipe (1-based)
    pub order: u32,

    /// Instruction text shown to the cook
    pub description: String,

    /// Countdown length in seconds; absent or zero means no timer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_sec: Option<u32>,
}

impl Step {
    /// Creates a step without a timer.
    pub fn new(order: u32, description: impl Into<String>) -> Self {
        Self {
            order,
            description: description.into(),
            duration_sec: None,
        }
    }

    /// Creates a step carrying a countdown duration.
    pub fn timed(order: u32, description: impl Into<String>, duration_sec: u32) -> Self {
        Self {
            order,
            description: description.into(),
            duration_sec: Some(duration_sec),
        }
    }

    /// Seconds the step's timer is seeded with (`0` when untimed).
    pub fn timer_seconds(&self) -> u32 {
        self.duration_sec.unwrap_or(0)
    }

    /// Whether this step has a countdown at all.
    pub fn has_timer(&self) -> bool {
        self.timer_seconds() > 0
    }
}

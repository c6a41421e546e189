//! Progress markers for steps in a cooking session.

use serde::{Deserialize, Serialize};

/// Where a step stands relative to the cook's progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepMark {
    /// Step has been passed or finalized
    Done,

    /// Step is the one on screen
    Current,

    /// Step has not been reached yet
    Todo,
}

impl StepMark {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepMark::Done => "done",
            StepMark::Current => "current",
            StepMark::Todo => "todo",
        }
    }

    /// Get the mark with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sous_core::models::StepMark;
    ///
    /// assert_eq!(StepMark::Done.icon(), "✓");
    /// assert_eq!(StepMark::Current.icon(), "➤");
    /// assert_eq!(StepMark::Todo.icon(), "○");
    /// ```
    pub fn icon(&self) -> &'static str {
        match self {
            StepMark::Done => "✓",
            StepMark::Current => "➤",
            StepMark::Todo => "○",
        }
    }
}

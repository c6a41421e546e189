//! One-line outcome messages for commands that have no resource to show.

use std::fmt;

use crate::session::SessionExit;

/// A `Success:` or `Error:` line.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Reported when a recipe lookup or a cooking load comes back empty.
    pub fn recipe_not_found(id: u64) -> Self {
        Self::failure(format!("Recipe {id} not found"))
    }

    /// Reported when the user finishes a walk-through.
    pub fn finished(exit: SessionExit) -> Self {
        Self::success(format!(
            "Finished cooking ({}/{} steps complete)",
            exit.completed_steps, exit.total_steps
        ))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

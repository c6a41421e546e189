//! Recipe model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Step;

/// A recipe together with its preparation steps.
///
/// Steps are kept in whatever order the data source returned them. The cooking
/// session sorts them when it is initialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique identifier for the recipe
    pub id: u64,

    /// Recipe name
    pub title: String,

    /// Optional introduction or notes
    pub description: Option<String>,

    /// Preparation steps, not necessarily sorted
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Timestamp when the recipe was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the recipe was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Recipe {
    /// Total countdown time across all timed steps, in seconds.
    pub fn total_timer_seconds(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.timer_seconds())).sum()
    }
}

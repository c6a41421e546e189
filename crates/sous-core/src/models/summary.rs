//! Recipe summary types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Recipe;

/// Summary information about a recipe for list views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe ID
    pub id: u64,
    /// Recipe name
    pub title: String,
    /// Optional introduction
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Number of steps
    pub total_steps: u32,
    /// Number of steps with a countdown
    pub timed_steps: u32,
    /// Sum of all step durations in seconds
    pub total_timer_sec: u64,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            created_at: recipe.created_at,
            total_steps: recipe.steps.len() as u32,
            timed_steps: recipe.steps.iter().filter(|s| s.has_timer()).count() as u32,
            total_timer_sec: recipe.total_timer_seconds(),
        }
    }
}

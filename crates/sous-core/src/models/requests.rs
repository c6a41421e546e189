//! Request types for importing recipes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Step;
use crate::error::{Result, SousError};

/// A recipe to be added to the store, typically read from a JSON file.
///
/// ```rust
/// use sous_core::models::NewRecipe;
///
/// let recipe: NewRecipe = serde_json::from_str(
///     r#"{"title": "Pancakes", "steps": [{"order": 1, "description": "Whisk"}]}"#,
/// )
/// .unwrap();
/// assert!(recipe.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRecipe {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<NewStep>,
}

/// A step of a [`NewRecipe`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStep {
    pub order: u32,
    pub description: String,
    #[serde(default)]
    pub duration_sec: Option<u32>,
}

impl From<NewStep> for Step {
    fn from(val: NewStep) -> Self {
        Step {
            order: val.order,
            description: val.description,
            duration_sec: val.duration_sec,
        }
    }
}

impl NewRecipe {
    /// Checks the recipe before it is stored.
    ///
    /// Orders must be positive and unique; they do not need to be contiguous
    /// or sorted.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SousError::invalid_input("title").with_reason("must not be empty"));
        }

        let mut seen = HashSet::with_capacity(self.steps.len());
        for step in &self.steps {
            if step.order == 0 {
                return Err(SousError::invalid_input("order")
                    .with_reason("step order is 1-based and must be positive"));
            }
            if !seen.insert(step.order) {
                return Err(SousError::invalid_input("order")
                    .with_reason(format!("duplicate step order {}", step.order)));
            }
            if step.description.trim().is_empty() {
                return Err(SousError::invalid_input("description")
                    .with_reason(format!("step {} has no description", step.order)));
            }
        }

        Ok(())
    }
}

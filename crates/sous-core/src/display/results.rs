//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Recipe;

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use sous_core::{display::CreateResult, models::{Recipe, Step}};
/// use jiff::Timestamp;
///
/// let recipe = Recipe {
///     id: 3,
///     title: "Flatbread".to_string(),
///     description: None,
///     steps: vec![Step::timed(1, "Rest the dough", 1800)],
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(recipe).to_string();
/// assert!(output.contains("Created recipe with ID: 3"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created recipe with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted recipe '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

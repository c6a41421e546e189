//! Source of recipe steps for a cooking session.

use std::future::Future;

use crate::{error::Result, models::Recipe};

/// Fetches a recipe, with its unordered steps, by ID.
///
/// Implementations must report a missing recipe as
/// [`SousError::RecipeNotFound`](crate::error::SousError::RecipeNotFound) and
/// anything else (I/O, database, decoding) as one of the other variants, so
/// callers can tell "not found" apart from a transient failure.
pub trait RecipeProvider: Send + Sync {
    fn fetch_recipe(&self, id: u64) -> impl Future<Output = Result<Recipe>> + Send;
}

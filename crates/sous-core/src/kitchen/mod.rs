//! Async access to the local recipe store.
//!
//! [`Kitchen`] is the recipe steps provider shipped with sous: it keeps recipes
//! in a SQLite file and hands them to cooking mode through
//! [`RecipeProvider`](crate::provider::RecipeProvider). SQLite calls block, so
//! every operation opens its own connection inside
//! [`tokio::task::spawn_blocking`].
//!
//! ```rust
//! use sous_core::{models::{NewRecipe, NewStep}, KitchenBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kitchen = KitchenBuilder::new()
//!     .with_database_path(Some("recipes.db"))
//!     .build()
//!     .await?;
//!
//! let recipe = kitchen
//!     .add_recipe(&NewRecipe {
//!         title: "Soft-boiled eggs".to_string(),
//!         description: None,
//!         steps: vec![NewStep {
//!             order: 1,
//!             description: "Lower eggs into boiling water".to_string(),
//!             duration_sec: Some(390),
//!         }],
//!     })
//!     .await?;
//! println!("{recipe}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod recipe_ops;

pub use builder::KitchenBuilder;

/// Handle to the recipe store.
#[derive(Debug, Clone)]
pub struct Kitchen {
    pub(crate) db_path: PathBuf,
}

impl Kitchen {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file backing this kitchen.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }
}

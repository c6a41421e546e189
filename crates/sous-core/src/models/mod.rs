//! Data models for recipes and their steps.
//!
//! This module contains the domain models consumed by the cooking session:
//! recipes as supplied by a [`crate::provider::RecipeProvider`], the steps they
//! carry, and the request shapes used to import new recipes. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use sous_core::models::Step;
//!
//! let step = Step::timed(2, "Simmer the sauce", 90);
//! assert_eq!(step.timer_seconds(), 90);
//!
//! let untimed = Step::new(1, "Dice the onions");
//! assert_eq!(untimed.timer_seconds(), 0);
//! ```

pub mod recipe;
pub mod requests;
pub mod status;
pub mod step;
pub mod summary;


pub use recipe::Recipe;
pub use requests::{NewRecipe, NewStep};
pub use status::StepMark;
pub use step::Step;
pub use summary::RecipeSummary;

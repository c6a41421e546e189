//! Core library for the sous guided cooking mode.
//!
//! This crate provides the cooking-mode state machine (step navigation, a
//! per-step countdown timer, and completion tracking), the clock that drives
//! the countdown, and a local SQLite recipe store that feeds it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ RecipeProvider  │    │   CookingMode   │    │   CookingView   │
//! │ (Kitchen/SQLite)│───▶│ session + ticks │───▶│ (markdown, UI)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`session`]: the synchronous state machine ([`CookingSession`])
//! - [`mode`]: the Tokio-driven wrapper owning the single tick source
//! - [`view`]: the snapshot a user interface renders
//! - [`kitchen`] and [`db`]: the recipe store
//!
//! # Quick Start
//!
//! ```rust
//! use sous_core::{CookingModeBuilder, KitchenBuilder, LoadState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kitchen = KitchenBuilder::new()
//!     .with_database_path(Some("recipes.db"))
//!     .build()
//!     .await?;
//!
//! match CookingModeBuilder::new().load(&kitchen, 1).await {
//!     LoadState::Ready(mut mode) => {
//!         mode.next();
//!         mode.toggle_timer();
//!         println!("{}", mode.view());
//!     }
//!     LoadState::NotReady(e) => println!("Recipe not available: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod kitchen;
pub mod mode;
pub mod models;
pub mod provider;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, RecipeSummaries};
pub use error::{Result, SousError};
pub use kitchen::{Kitchen, KitchenBuilder};
pub use mode::{CookingMode, CookingModeBuilder, Haptics, LoadState, VibrationPattern};
pub use models::{NewRecipe, NewStep, Recipe, RecipeSummary, Step, StepMark};
pub use provider::RecipeProvider;
pub use session::{CookingSession, SessionExit, TimerPhase};
pub use view::CookingView;

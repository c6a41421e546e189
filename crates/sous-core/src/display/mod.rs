//! Display formatting functions and result types.
//!
//! Domain models and the cooking view implement [`std::fmt::Display`] as
//! markdown (see [`models`]); this module adds newtype wrappers for
//! collections and for the outcome of store operations, so the CLI can print
//! everything through one renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │ (Recipe, View)  │───▶│ Result Types    │───▶│   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (RecipeSummaries)
//! - [`results`]: Operation result types (CreateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time and duration formatting utilities
//! - [`models`]: Display implementations for domain models and the view
//!
//! ```rust
//! use sous_core::display::OperationStatus;
//!
//! let done = OperationStatus::success("Finished cooking".to_string());
//! assert_eq!(done.to_string(), "Success: Finished cooking\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::RecipeSummaries;
pub use datetime::{LocalDateTime, TotalTime};
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;

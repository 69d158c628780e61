//! # selection-core
//!
//! Foundation crate for the selection service.
//! Defines the domain model, request/reply models, errors, and traits.
//! Every other crate in the workspace depends on this.

pub mod errors;
pub mod models;
pub mod selection;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{SelectionError, SelectionResult};
pub use models::{Batch, BatchOption, RankedOption};
pub use selection::{Selection, SelectionKey, SelectionOption, SortMethod};

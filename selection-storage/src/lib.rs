//! # selection-storage
//!
//! SQLite implementation of `ISelectionRepository`: schema migrations, a
//! JSON options column, and first-write-wins get-or-create keyed by the
//! identity tuple.

pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::StorageEngine;

use selection_core::errors::{SelectionError, StorageError};

/// Wrap a low-level failure message as an opaque storage error.
pub(crate) fn to_storage_err(message: String) -> SelectionError {
    StorageError::Sqlite { message }.into()
}

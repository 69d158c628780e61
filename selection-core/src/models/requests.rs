//! Service request models. The transport boundary maps wire messages onto
//! these field-for-field.

use std::collections::HashMap;

use crate::selection::{SelectionKey, SelectionOption, SortMethod};

/// Create (or re-display) a selection.
///
/// `batch_size` and `sort_method` are display preferences only: they shape
/// the reply but are never persisted. `randomize` shuffles the submitted
/// options before numbers are assigned at creation; it is independent of
/// `SortMethod::Random`.
#[derive(Debug, Clone, Default)]
pub struct CreateSelectionRequest {
    pub key: SelectionKey,
    pub options: Vec<SelectionOption>,
    pub randomize: bool,
    pub batch_size: i32,
    pub sort_method: SortMethod,
}

/// Resolve a free-text reply against a stored selection.
#[derive(Debug, Clone, Default)]
pub struct ParseSelectionRequest {
    pub key: SelectionKey,
    pub content: String,
}

/// Re-rank stored options from an explicit option-id to rank mapping.
#[derive(Debug, Clone, Default)]
pub struct QuerySelectionRequest {
    pub key: SelectionKey,
    pub ranks: HashMap<String, i64>,
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single selectable item: an opaque id, display content, and free-form
/// metadata. Immutable once submitted.
///
/// Named `SelectionOption` because `Option` is taken in Rust.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOption {
    pub option_id: String,
    pub content: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl SelectionOption {
    pub fn new(option_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            option_id: option_id.into(),
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry, builder-style.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

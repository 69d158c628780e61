use serde::{Deserialize, Serialize};

use crate::selection::SelectionOption;

/// One stored (number, option) pair as it appears in a display page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOption {
    pub number: u32,
    pub option: SelectionOption,
}

/// A contiguous slice of a sorted option sequence, for paged display.
/// Derived on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub options: Vec<BatchOption>,
}

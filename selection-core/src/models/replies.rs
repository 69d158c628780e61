//! Service reply models.

use crate::models::{Batch, RankedOption};
use crate::selection::Selection;

/// Reply to a create call: the stored selection plus its display pages.
#[derive(Debug, Clone)]
pub struct SelectionReply {
    pub selection: Selection,
    pub batches: Vec<Batch>,
}

/// Reply to a query call. `content` is the space-joined decimal numbers of
/// `options` in rank order, the exact textual form parse accepts back.
#[derive(Debug, Clone, Default)]
pub struct QuerySelectionReply {
    pub options: Vec<RankedOption>,
    pub content: String,
}

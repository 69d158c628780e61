use crate::errors::SelectionResult;
use crate::selection::{Selection, SelectionKey};

/// Persistence collaborator for selections.
///
/// The store is the only shared mutable resource in the system, so the
/// implementation must provide atomic get-or-create semantics keyed by the
/// identity tuple: concurrent creates for the same key converge on exactly
/// one persisted numbering. Retry and backoff on storage failures are the
/// caller's boundary concern, not the repository's.
pub trait ISelectionRepository: Send + Sync {
    /// Persist a selection, first write wins.
    ///
    /// Returns the selection that is persisted after the call: the argument
    /// if this call won, the earlier winner's selection if the key already
    /// existed. Losers observe the winner's state, never their own.
    fn create_selection(&self, selection: &Selection) -> SelectionResult<Selection>;

    /// Look up the selection for an identity key.
    ///
    /// `Err(SelectionError::NotFound)` when no selection exists for the key.
    fn selection(&self, key: &SelectionKey) -> SelectionResult<Selection>;
}

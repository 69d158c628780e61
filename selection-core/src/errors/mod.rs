//! Error taxonomy: validation (safe to surface to end users), not-found
//! (an expected branch during create, an error everywhere else), and opaque
//! storage failures (propagated unchanged, never retried in-core).

pub mod storage_error;
pub mod validation_error;

pub use storage_error::StorageError;
pub use validation_error::ValidationError;

use crate::selection::SelectionKey;

/// Aggregate error for all selection operations.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "no selection found for app={app_id} instance={instance_id} \
         user={user_id} server={server_id}"
    )]
    NotFound {
        app_id: String,
        instance_id: String,
        user_id: String,
        server_id: String,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SelectionError {
    /// A `NotFound` for the given identity key.
    pub fn not_found(key: &SelectionKey) -> Self {
        SelectionError::NotFound {
            app_id: key.app_id.clone(),
            instance_id: key.instance_id.clone(),
            user_id: key.user_id.clone(),
            server_id: key.server_id.clone(),
        }
    }

    /// Whether this is the expected no-selection-yet branch.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SelectionError::NotFound { .. })
    }

    /// Whether this is user input the boundary may surface verbatim.
    pub fn is_validation(&self) -> bool {
        matches!(self, SelectionError::Validation(_))
    }
}

pub type SelectionResult<T> = Result<T, SelectionError>;

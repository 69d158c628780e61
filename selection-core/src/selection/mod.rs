//! Domain model: options, the persisted numbered selection, and sort methods.

pub mod key;
pub mod option;
pub mod sort_method;

pub use key::SelectionKey;
pub use option::SelectionOption;
pub use sort_method::SortMethod;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::BatchOption;

/// A persisted numbered list of options tied to an identity key.
///
/// The `options` numbering is assigned exactly once at creation (1..=N in
/// presentation order) and is immutable for the lifetime of the selection:
/// it is the number the end user is told to reply with, so later sorting or
/// batching requests only change display order, never the stored numbers.
/// `BTreeMap` keeps iteration in number order wherever positional stability
/// matters (batching, rank tie-breaks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: String,
    pub key: SelectionKey,
    pub options: BTreeMap<u32, SelectionOption>,
    pub created_at: DateTime<Utc>,
}

impl Selection {
    /// Build a new selection, assigning numbers 1..=N in the order given.
    pub fn numbered(key: SelectionKey, options: Vec<SelectionOption>) -> Self {
        let options = options
            .into_iter()
            .enumerate()
            .map(|(i, option)| (i as u32 + 1, option))
            .collect();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            key,
            options,
            created_at: Utc::now(),
        }
    }

    /// The stored numbering as display pairs, in ascending number order.
    pub fn numbered_options(&self) -> Vec<BatchOption> {
        self.options
            .iter()
            .map(|(number, option)| BatchOption {
                number: *number,
                option: option.clone(),
            })
            .collect()
    }
}

//! Derived and request/reply value types. None of these are persisted.

pub mod batch;
pub mod ranked_option;
pub mod replies;
pub mod requests;

pub use batch::{Batch, BatchOption};
pub use ranked_option::RankedOption;
pub use replies::{QuerySelectionReply, SelectionReply};
pub use requests::{CreateSelectionRequest, ParseSelectionRequest, QuerySelectionRequest};

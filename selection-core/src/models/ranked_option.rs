use serde::{Deserialize, Serialize};

use crate::selection::SelectionOption;

/// An option annotated with the position it occupies in a resolved reply or
/// an explicit re-rank request.
///
/// `rank` is the position assigned during interpretation (0-based appearance
/// index for parsed replies, caller-supplied for query requests, hence i64);
/// `number` is the stable selection-assigned number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedOption {
    pub rank: i64,
    pub number: u32,
    pub option: SelectionOption,
}

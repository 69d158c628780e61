use crate::errors::SelectionResult;
use crate::models::{
    CreateSelectionRequest, ParseSelectionRequest, QuerySelectionReply, QuerySelectionRequest,
    RankedOption, SelectionReply,
};

/// The orchestrating selection service. Stateless; one call per invocation.
pub trait ISelectionService: Send + Sync {
    /// Get-or-create the selection for the request's identity key and build
    /// its display reply with the request's display preferences.
    fn create(&self, request: CreateSelectionRequest) -> SelectionResult<SelectionReply>;

    /// Resolve a free-text numeric reply back to stored options, one ranked
    /// option per digit run in order of appearance.
    fn parse(&self, request: ParseSelectionRequest) -> SelectionResult<Vec<RankedOption>>;

    /// Re-rank stored options from an explicit option-id to rank mapping.
    fn query(&self, request: QuerySelectionRequest) -> SelectionResult<QuerySelectionReply>;
}

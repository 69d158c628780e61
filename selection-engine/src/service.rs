//! The orchestrating service: get-or-create, free-text parse, explicit
//! re-rank. Stateless; the repository is the only collaborator.

use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use tracing::{debug, info};

use selection_core::errors::{SelectionError, SelectionResult, ValidationError};
use selection_core::models::{
    CreateSelectionRequest, ParseSelectionRequest, QuerySelectionReply, QuerySelectionRequest,
    RankedOption, SelectionReply,
};
use selection_core::selection::Selection;
use selection_core::traits::{ISelectionRepository, ISelectionService};

use crate::{batcher, sorter};

/// Accepts digits and whitespace only. Rejects empty content: an empty
/// reply to a numbered prompt is a user mistake worth surfacing.
static VALIDATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d\s]+$").unwrap());

/// One token per maximal digit run, left to right.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// The selection service. Safe under unbounded concurrent invocation:
/// sorting, batching, parse, and query are pure, and the repository carries
/// the atomicity guarantee for concurrent creates.
pub struct SelectionService<'a> {
    repository: &'a dyn ISelectionRepository,
}

impl<'a> SelectionService<'a> {
    pub fn new(repository: &'a dyn ISelectionRepository) -> Self {
        Self { repository }
    }

    /// `create` with an explicit randomness source, for reproducible
    /// shuffles under test harnesses.
    pub fn create_with_rng<R: Rng + ?Sized>(
        &self,
        mut request: CreateSelectionRequest,
        rng: &mut R,
    ) -> SelectionResult<SelectionReply> {
        // Step 1: Re-display if a selection already exists for the key.
        // Display preferences come from the current request, never storage.
        match self.repository.selection(&request.key) {
            Ok(existing) => {
                debug!(selection_id = %existing.id, "found existing selection");
                return Ok(self.build_reply(&request, existing, rng));
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        // Step 2: Assign numbers 1..=N, shuffling first when requested.
        // The randomize shuffle fixes the stored numbering; it is unrelated
        // to SortMethod::Random, which only reorders the display.
        if request.randomize {
            request.options.shuffle(rng);
        }
        let selection = Selection::numbered(request.key.clone(), std::mem::take(&mut request.options));

        // Step 3: Persist, first write wins. The repository returns the
        // winner's selection, which may differ from ours under contention.
        let persisted = self.repository.create_selection(&selection)?;
        info!(selection_id = %persisted.id, options = persisted.options.len(), "created selection");

        Ok(self.build_reply(&request, persisted, rng))
    }

    /// Sort and batch a stored numbering per the request's preferences.
    fn build_reply<R: Rng + ?Sized>(
        &self,
        request: &CreateSelectionRequest,
        selection: Selection,
        rng: &mut R,
    ) -> SelectionReply {
        let sorted = sorter::sort(selection.numbered_options(), &request.sort_method, rng);
        let batches = batcher::create_batches(&sorted, request.batch_size);

        SelectionReply { selection, batches }
    }
}

impl ISelectionService for SelectionService<'_> {
    fn create(&self, request: CreateSelectionRequest) -> SelectionResult<SelectionReply> {
        self.create_with_rng(request, &mut rand::rng())
    }

    fn parse(&self, request: ParseSelectionRequest) -> SelectionResult<Vec<RankedOption>> {
        if !VALIDATION_RE.is_match(&request.content) {
            return Err(ValidationError::NonNumericContent.into());
        }

        let selection = self.repository.selection(&request.key)?;

        let mut ranked = Vec::new();
        for (rank, token) in TOKEN_RE.find_iter(&request.content).enumerate() {
            // Overflowing digit runs fail the same way unknown numbers do.
            let number: u32 = token.as_str().parse().map_err(|_| {
                SelectionError::from(ValidationError::UnknownNumber {
                    token: token.as_str().to_string(),
                })
            })?;

            let option = selection.options.get(&number).ok_or_else(|| {
                SelectionError::from(ValidationError::UnknownNumber {
                    token: number.to_string(),
                })
            })?;

            ranked.push(RankedOption {
                rank: rank as i64,
                number,
                option: option.clone(),
            });
        }

        debug!(selection_id = %selection.id, choices = ranked.len(), "parsed selection reply");
        Ok(ranked)
    }

    fn query(&self, request: QuerySelectionRequest) -> SelectionResult<QuerySelectionReply> {
        if request.ranks.is_empty() {
            return Ok(QuerySelectionReply::default());
        }

        let selection = self.repository.selection(&request.key)?;
        if selection.options.is_empty() {
            return Err(SelectionError::not_found(&request.key));
        }

        // Intersect by option id; iteration is in stored number order, so
        // the stable sort breaks rank ties by storage order.
        let mut ranked: Vec<RankedOption> = selection
            .options
            .iter()
            .filter_map(|(number, option)| {
                request.ranks.get(&option.option_id).map(|rank| RankedOption {
                    rank: *rank,
                    number: *number,
                    option: option.clone(),
                })
            })
            .collect();
        ranked.sort_by_key(|r| r.rank);

        let content = ranked
            .iter()
            .map(|r| r.number.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        debug!(selection_id = %selection.id, matched = ranked.len(), "queried selection");
        Ok(QuerySelectionReply {
            options: ranked,
            content,
        })
    }
}

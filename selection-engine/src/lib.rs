//! # selection-engine
//!
//! The ordering and partitioning core: a pluggable sorter dispatching a
//! closed `SortMethod` union, a fixed-size batcher, and the orchestrating
//! `SelectionService` that makes creation idempotent, parses free-text
//! numeric replies, and re-ranks options from explicit rank mappings.
//!
//! Sorting, batching, parse, and query are pure, synchronous, in-memory
//! operations; the only collaborator is an `ISelectionRepository`.

pub mod batcher;
pub mod service;
pub mod sorter;

pub use service::SelectionService;

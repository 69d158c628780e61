//! SQL query modules.

pub mod selection_crud;

//! StorageEngine: owns the SQLite connection, runs migrations on open, and
//! implements `ISelectionRepository`.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use selection_core::errors::{SelectionError, SelectionResult};
use selection_core::selection::{Selection, SelectionKey};
use selection_core::traits::ISelectionRepository;

use crate::migrations;
use crate::queries::selection_crud;
use crate::to_storage_err;

/// The selection store. A single mutex-guarded connection: the workload is
/// one small row per call, so pooling buys nothing here.
pub struct StorageEngine {
    conn: Mutex<Connection>,
}

impl StorageEngine {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> SelectionResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        let engine = Self {
            conn: Mutex::new(conn),
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> SelectionResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        let engine = Self {
            conn: Mutex::new(conn),
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Run migrations.
    fn initialize(&self) -> SelectionResult<()> {
        self.with_conn(|conn| migrations::run_migrations(conn))
    }

    /// Run a closure against the guarded connection.
    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> SelectionResult<T>,
    ) -> SelectionResult<T> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| to_storage_err("connection mutex poisoned".to_string()))?;
        f(&conn)
    }
}

impl ISelectionRepository for StorageEngine {
    fn create_selection(&self, selection: &Selection) -> SelectionResult<Selection> {
        // Insert and re-read under one lock: on a key conflict the insert
        // is a no-op and the read returns the winner's row, so concurrent
        // losers observe the winner's numbering.
        self.with_conn(|conn| {
            selection_crud::insert_selection(conn, selection)?;
            selection_crud::get_selection(conn, &selection.key)?
                .ok_or_else(|| SelectionError::not_found(&selection.key))
        })
    }

    fn selection(&self, key: &SelectionKey) -> SelectionResult<Selection> {
        self.with_conn(|conn| {
            selection_crud::get_selection(conn, key)?
                .ok_or_else(|| SelectionError::not_found(key))
        })
    }
}

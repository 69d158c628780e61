//! v001: the selection table. One row per selection; the numbered options
//! live in a JSON column, and the identity tuple carries a unique index so
//! conflicting creates resolve in SQL.

use rusqlite::Connection;

use selection_core::errors::{SelectionResult, StorageError};

/// Run the v001 migration: create the selection table.
pub fn migrate(conn: &Connection) -> SelectionResult<()> {
    tracing::info!("v001: creating selection table");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS selection (
            id          TEXT PRIMARY KEY,
            app_id      TEXT NOT NULL DEFAULT '',
            instance_id TEXT NOT NULL DEFAULT '',
            user_id     TEXT NOT NULL DEFAULT '',
            server_id   TEXT NOT NULL DEFAULT '',
            options     TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            UNIQUE (app_id, instance_id, user_id, server_id)
        );
        ",
    )
    .map_err(|e| StorageError::MigrationFailed {
        version: 1,
        reason: e.to_string(),
    })?;

    tracing::info!("v001: selection table created");
    Ok(())
}

//! Schema migrations, driven by `PRAGMA user_version`.

pub mod v001_selection_table;

use rusqlite::Connection;

use selection_core::errors::{SelectionResult, StorageError};

/// Apply any pending migrations.
pub fn run_migrations(conn: &Connection) -> SelectionResult<()> {
    let version: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;

    if version < 1 {
        v001_selection_table::migrate(conn)?;
        set_version(conn, 1)?;
    }

    Ok(())
}

fn set_version(conn: &Connection, version: u32) -> SelectionResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| {
            StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            }
            .into()
        })
}

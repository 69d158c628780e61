//! Insert and lookup for selection rows.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use selection_core::errors::{SelectionResult, StorageError};
use selection_core::selection::{Selection, SelectionKey, SelectionOption};

use crate::to_storage_err;

/// Insert a selection, first write wins.
///
/// On an identity-key conflict the insert is a no-op; the caller re-reads
/// to observe whichever row won.
pub fn insert_selection(conn: &Connection, selection: &Selection) -> SelectionResult<()> {
    let options_json = serde_json::to_string(&selection.options).map_err(|e| {
        StorageError::Serialization {
            reason: e.to_string(),
        }
    })?;

    conn.execute(
        "INSERT INTO selection (
            id, app_id, instance_id, user_id, server_id, options, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        ON CONFLICT (app_id, instance_id, user_id, server_id) DO NOTHING",
        params![
            selection.id,
            selection.key.app_id,
            selection.key.instance_id,
            selection.key.user_id,
            selection.key.server_id,
            options_json,
            selection.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(())
}

/// Look up the selection for an identity key. `None` when absent.
pub fn get_selection(
    conn: &Connection,
    key: &SelectionKey,
) -> SelectionResult<Option<Selection>> {
    let row = conn
        .query_row(
            "SELECT id, app_id, instance_id, user_id, server_id, options, created_at
             FROM selection
             WHERE app_id = ?1 AND instance_id = ?2 AND user_id = ?3 AND server_id = ?4",
            params![key.app_id, key.instance_id, key.user_id, key.server_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((id, app_id, instance_id, user_id, server_id, options_json, created_at)) = row
    else {
        return Ok(None);
    };

    let options: BTreeMap<u32, SelectionOption> =
        serde_json::from_str(&options_json).map_err(|e| StorageError::Serialization {
            reason: e.to_string(),
        })?;

    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| StorageError::Serialization {
            reason: e.to_string(),
        })?
        .with_timezone(&Utc);

    Ok(Some(Selection {
        id,
        key: SelectionKey {
            app_id,
            instance_id,
            user_id,
            server_id,
        },
        options,
        created_at,
    }))
}

/// Helper trait to make `query_row` return `Option` on not-found.
trait OptionalRow<T> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error>;
}

impl<T> OptionalRow<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, rusqlite::Error> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

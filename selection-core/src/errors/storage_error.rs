/// Storage-layer errors. Opaque to end users; the boundary logs them.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },
}

/// Storage-layer errors for the SQLite-backed prediction store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("failed to open prediction store at {location}: {reason}")]
    OpenFailed { location: String, reason: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("{what} lock poisoned")]
    LockPoisoned { what: &'static str },

    #[error("prediction store is not open")]
    Unavailable,
}

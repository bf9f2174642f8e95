//! Schema migrations, tracked through `PRAGMA user_version`.

mod v001_predictions;

use rusqlite::Connection;
use tracing::info;

use lookahead_core::errors::StorageError;
use lookahead_core::LookaheadResult;

use crate::to_storage_err;

type Migration = fn(&Connection) -> LookaheadResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_predictions::migrate)];

/// Latest schema version.
pub const LATEST_VERSION: u32 = 1;

/// Bring the schema up to [`LATEST_VERSION`].
pub fn run_migrations(conn: &Connection) -> LookaheadResult<()> {
    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version,
            reason: e.to_string(),
        })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| to_storage_err(e.to_string()))?;
        info!(version, "applied prediction store migration");
    }
    Ok(())
}

/// Schema version recorded in the database.
pub fn current_version(conn: &Connection) -> LookaheadResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

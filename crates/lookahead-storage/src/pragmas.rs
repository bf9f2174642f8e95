//! PRAGMA configuration applied to every store connection.
//!
//! WAL mode, NORMAL sync, 5s busy_timeout.

use rusqlite::Connection;

use lookahead_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use lookahead_core::LookaheadResult;

use crate::to_storage_err;

/// Apply journaling and locking pragmas to a file-backed connection.
pub fn apply_pragmas(conn: &Connection) -> LookaheadResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {DEFAULT_BUSY_TIMEOUT_MS};
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> LookaheadResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}

//! Raw key/value access to the predictions table.

use rusqlite::{params, Connection, OptionalExtension};

use lookahead_core::LookaheadResult;

use crate::to_storage_err;

/// Stored bytes for `key`, or `None` if the key is absent.
pub fn get_value(conn: &Connection, key: &str) -> LookaheadResult<Option<Vec<u8>>> {
    conn.query_row(
        "SELECT value FROM predictions WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Insert or replace the value under `key`.
pub fn put_value(conn: &Connection, key: &str, value: &[u8]) -> LookaheadResult<()> {
    conn.execute(
        "INSERT INTO predictions (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Number of keys in the store.
pub fn key_count(conn: &Connection) -> LookaheadResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM predictions", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

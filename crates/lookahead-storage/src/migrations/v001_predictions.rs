//! v001: predictions table.

use rusqlite::Connection;

use lookahead_core::LookaheadResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LookaheadResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS predictions (
            key     TEXT PRIMARY KEY NOT NULL,
            value   BLOB NOT NULL
        ) WITHOUT ROWID;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

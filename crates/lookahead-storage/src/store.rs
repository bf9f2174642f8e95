//! PredictionStore — one durable handle, the ranked-list codec, and the
//! reinforcement update.
//!
//! Failures are soft: a store that cannot be opened is marked invalid
//! instead of returning an error, read failures collapse into "no
//! prediction", and write failures are logged and dropped.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use tracing::{debug, error, warn};

use lookahead_core::errors::StorageError;
use lookahead_core::{LookaheadError, LookaheadResult, PredictionList};

use crate::pragmas::apply_pragmas;
use crate::{codec, migrations, queries, to_storage_err};

/// The durable context-key → ranked-predictions map.
///
/// Validity is decided once, at construction.
pub struct PredictionStore {
    location: String,
    conn: Option<Mutex<Connection>>,
    /// Words of the last successful lookup, in rank order.
    candidates: Mutex<Vec<String>>,
}

impl PredictionStore {
    /// Open or create the store at `path`.
    ///
    /// On failure the returned store reports `valid() == false`.
    pub fn open(path: &Path) -> Self {
        let location = path.to_string_lossy().into_owned();
        let conn = match Self::connect(path) {
            Ok(conn) => Some(Mutex::new(conn)),
            Err(e) => {
                error!(%location, error = %e, "failed to open prediction store");
                None
            }
        };
        Self::with_connection(location, conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Self {
        let conn = Connection::open_in_memory()
            .map_err(|e| to_storage_err(e.to_string()))
            .and_then(|conn| {
                migrations::run_migrations(&conn)?;
                Ok(conn)
            });
        let conn = match conn {
            Ok(conn) => Some(Mutex::new(conn)),
            Err(e) => {
                error!(error = %e, "failed to open in-memory prediction store");
                None
            }
        };
        Self::with_connection(":memory:".to_string(), conn)
    }

    fn with_connection(location: String, conn: Option<Mutex<Connection>>) -> Self {
        let store = Self {
            location,
            conn,
            candidates: Mutex::new(Vec::new()),
        };
        store.clear();
        store
    }

    fn connect(path: &Path) -> LookaheadResult<Connection> {
        let open_failed = |reason: String| -> LookaheadError {
            StorageError::OpenFailed {
                location: path.display().to_string(),
                reason,
            }
            .into()
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| open_failed(e.to_string()))?;
        }
        let conn = Connection::open(path).map_err(|e| open_failed(e.to_string()))?;
        apply_pragmas(&conn)?;
        migrations::run_migrations(&conn)?;
        Ok(conn)
    }

    /// Whether the underlying database opened successfully.
    pub fn valid(&self) -> bool {
        self.conn.is_some()
    }

    /// Storage location this store was opened at.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Ranked predictions for `key`.
    ///
    /// Missing keys, read errors and undecodable values all return
    /// `None`. A hit replaces the current-candidates projection.
    pub fn lookup(&self, key: &str) -> Option<PredictionList> {
        match self.try_lookup(key) {
            Ok(Some(list)) => {
                *self.lock_candidates() = list.words();
                Some(list)
            }
            Ok(None) => None,
            Err(LookaheadError::Codec(e)) => {
                warn!(key, error = %e, "corrupt prediction list, treating as miss");
                None
            }
            Err(e) => {
                debug!(key, error = %e, "prediction lookup failed");
                None
            }
        }
    }

    /// Like [`lookup`](Self::lookup) but surfaces every failure.
    pub fn try_lookup(&self, key: &str) -> LookaheadResult<Option<PredictionList>> {
        self.with_conn(|conn| {
            let Some(bytes) = queries::get_value(conn, key)? else {
                return Ok(None);
            };
            Ok(Some(codec::decode(&bytes)?))
        })
    }

    /// Reinforce (`delete == false`) or suppress (`delete == true`)
    /// `word` under `key`. Write failures are logged, not returned.
    pub fn update(&self, key: &str, word: &str, delete: bool) {
        if let Err(e) = self.try_update(key, word, delete) {
            error!(key, word, delete, error = %e, "error updating or inserting prediction");
        }
    }

    /// Read-modify-write of one key inside a single transaction.
    ///
    /// Every reinforcement and every delete under an existing key is
    /// persisted, even when the list is unchanged or left empty. The one
    /// exception is a delete under an absent key: it writes nothing, so
    /// the key stays absent and `lookup` answers the same before and
    /// after, instead of turning "absent" into "present but empty".
    /// A corrupt existing value is replaced as if absent.
    pub fn try_update(&self, key: &str, word: &str, delete: bool) -> LookaheadResult<()> {
        self.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(e.to_string()))?;

            let existing = match queries::get_value(&tx, key)? {
                Some(bytes) => match codec::decode(&bytes) {
                    Ok(list) => Some(list),
                    Err(e) => {
                        warn!(key, error = %e, "overwriting corrupt prediction list");
                        None
                    }
                },
                None => None,
            };

            let mut list = match existing {
                Some(list) => list,
                None if delete => return Ok(()),
                None => PredictionList::new(),
            };

            if delete {
                list.remove(word);
            } else {
                list.reinforce(word);
            }

            queries::put_value(&tx, key, &codec::encode(&list))?;
            tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
            debug!(key, word, delete, entries = list.len(), "prediction updated");
            Ok(())
        })
    }

    /// Words of the last successful lookup.
    pub fn candidates(&self) -> Vec<String> {
        self.lock_candidates().clone()
    }

    /// Reset the current-candidates projection. Persisted keys are untouched.
    pub fn clear(&self) {
        self.lock_candidates().clear();
    }

    /// Number of persisted keys, 0 for an invalid store.
    pub fn key_count(&self) -> usize {
        self.with_conn(queries::key_count).unwrap_or(0)
    }

    /// Execute a closure with the connection, serialized across threads.
    pub fn with_conn<F, T>(&self, f: F) -> LookaheadResult<T>
    where
        F: FnOnce(&Connection) -> LookaheadResult<T>,
    {
        let conn = self.conn.as_ref().ok_or(StorageError::Unavailable)?;
        let guard = conn
            .lock()
            .map_err(|_| StorageError::LockPoisoned { what: "connection" })?;
        f(&guard)
    }

    fn lock_candidates(&self) -> MutexGuard<'_, Vec<String>> {
        // Plain word list; a panic elsewhere cannot leave it half-written.
        self.candidates.lock().unwrap_or_else(|e| e.into_inner())
    }
}

//! HandleCache — process-wide weak cache of open prediction stores.
//!
//! At most one live [`PredictionStore`] exists per location. The cache
//! never keeps a store alive itself: once every consumer drops its
//! `Arc`, the entry goes stale and the next request opens a fresh store.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, Weak};

use tracing::{error, info, warn};

use crate::store::PredictionStore;

/// Global singleton.
static GLOBAL: OnceLock<Arc<HandleCache>> = OnceLock::new();

/// Location → weak store handle.
#[derive(Default)]
pub struct HandleCache {
    stores: Mutex<HashMap<String, Weak<PredictionStore>>>,
}

impl HandleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache, created on first use.
    pub fn global() -> Arc<HandleCache> {
        GLOBAL.get_or_init(|| Arc::new(Self::new())).clone()
    }

    /// Return the live store for `location`, opening it if needed.
    ///
    /// Locations are keyed by their absolute, lexically normalized form,
    /// so `dir/predict.userdb` and `dir/./predict.userdb` share a store.
    /// Lookup, stale-entry eviction, construction and insertion all
    /// happen under one lock, so two callers can never race to open the
    /// same location. A store that fails to open is not cached.
    pub fn get_or_open(&self, location: &Path) -> Option<Arc<PredictionStore>> {
        let location = canonical_location(location);
        let key = location.to_string_lossy().into_owned();
        let mut stores = self.lock();

        if let Some(weak) = stores.get(&key) {
            if let Some(store) = weak.upgrade() {
                info!(location = %key, "using cached prediction store");
                return Some(store);
            }
            info!(location = %key, "cached prediction store has expired, creating a new one");
            stores.remove(&key);
        }

        info!(location = %key, "creating new prediction store");
        let store = Arc::new(PredictionStore::open(&location));
        if !store.valid() {
            error!(location = %key, "failed to create prediction store");
            return None;
        }
        stores.insert(key, Arc::downgrade(&store));
        Some(store)
    }

    /// Number of entries whose store is still alive.
    pub fn live_count(&self) -> usize {
        self.lock().values().filter(|w| w.strong_count() > 0).count()
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Weak<PredictionStore>>> {
        self.stores.lock().unwrap_or_else(|e| {
            warn!("handle cache lock poisoned, recovering");
            e.into_inner()
        })
    }
}

/// Absolute form of `path` with `.` removed and `..` folded into its
/// parent. Symlinks are not resolved; the file may not exist yet.
fn canonical_location(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root.
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

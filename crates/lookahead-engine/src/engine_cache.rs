//! EngineCache — process-wide weak cache of engines keyed by schema id.
//!
//! Mirrors [`HandleCache`] one layer up: every session of a schema shares
//! one engine (and through it one store) while any session holds it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, Weak};

use tracing::{info, warn};

use lookahead_core::{ResourceResolver, Schema};
use lookahead_storage::HandleCache;

use crate::engine::PredictionEngine;

/// Global singleton.
static GLOBAL: OnceLock<Arc<EngineCache>> = OnceLock::new();

/// Schema id → weak engine handle.
pub struct EngineCache {
    handles: Arc<HandleCache>,
    engines: Mutex<HashMap<String, Weak<PredictionEngine>>>,
}

impl EngineCache {
    /// Create a cache that opens stores through `handles`.
    pub fn new(handles: Arc<HandleCache>) -> Self {
        Self {
            handles,
            engines: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide cache, backed by the global [`HandleCache`].
    pub fn global() -> Arc<EngineCache> {
        GLOBAL
            .get_or_init(|| Arc::new(Self::new(HandleCache::global())))
            .clone()
    }

    pub fn handles(&self) -> &Arc<HandleCache> {
        &self.handles
    }

    /// Return the live engine for `schema`, creating it if needed.
    ///
    /// Creation failures are not cached; a later call retries.
    pub fn get_or_create(
        &self,
        schema: &Schema,
        resolver: &dyn ResourceResolver,
    ) -> Option<Arc<PredictionEngine>> {
        let mut engines = self.lock();

        if let Some(weak) = engines.get(&schema.schema_id) {
            if let Some(engine) = weak.upgrade() {
                info!(schema_id = %schema.schema_id, "using cached prediction engine");
                return Some(engine);
            }
            engines.remove(&schema.schema_id);
        }

        let engine = Arc::new(PredictionEngine::create(schema, resolver, &self.handles)?);
        engines.insert(schema.schema_id.clone(), Arc::downgrade(&engine));
        Some(engine)
    }

    /// Number of entries whose engine is still alive.
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

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Weak<PredictionEngine>>> {
        self.engines.lock().unwrap_or_else(|e| {
            warn!("engine cache lock poisoned, recovering");
            e.into_inner()
        })
    }
}

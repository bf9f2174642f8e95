//! PredictorComponent — builds a session per input context.

use std::sync::Arc;

use tracing::{error, info};

use lookahead_core::{InputContext, ResourceResolver, Schema};
use lookahead_engine::EngineCache;
use lookahead_session::PredictorSession;

/// Factory the host registers once and calls for every new context.
pub struct PredictorComponent {
    engines: Arc<EngineCache>,
    resolver: Arc<dyn ResourceResolver>,
}

impl PredictorComponent {
    pub fn new(engines: Arc<EngineCache>, resolver: Arc<dyn ResourceResolver>) -> Self {
        Self { engines, resolver }
    }

    /// Component backed by the process-wide engine and store caches.
    pub fn with_global_caches(resolver: Arc<dyn ResourceResolver>) -> Self {
        Self::new(EngineCache::global(), resolver)
    }

    pub fn engines(&self) -> &Arc<EngineCache> {
        &self.engines
    }

    /// New session for `ctx` under `schema`.
    ///
    /// `None` when the schema's prediction database is unavailable; the
    /// host then runs without prediction.
    pub fn create(&self, schema: &Schema, ctx: &dyn InputContext) -> Option<PredictorSession> {
        let Some(engine) = self.engines.get_or_create(schema, self.resolver.as_ref()) else {
            error!(schema_id = %schema.schema_id, "prediction engine unavailable");
            return None;
        };
        info!(schema_id = %schema.schema_id, "predictor session created");
        Some(PredictorSession::new(engine, ctx))
    }
}

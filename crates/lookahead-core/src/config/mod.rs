//! Predictor configuration as read from the host schema.

pub mod defaults;
mod schema;

pub use schema::{Schema, SchemaConfig, TomlSchemaConfig};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Tunables read once when an engine is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Logical file name of the prediction database.
    pub predict_db: String,
    /// Candidates returned per query. 0 = unlimited.
    pub max_candidates: usize,
    /// Consecutive predictions before the session stops. 0 = unlimited.
    pub max_iterations: u32,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            predict_db: defaults::DEFAULT_PREDICT_DB.to_string(),
            max_candidates: defaults::DEFAULT_MAX_CANDIDATES,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PredictorConfig {
    /// Read the three `predictor/*` keys, falling back to defaults.
    ///
    /// Negative limits are clamped to 0 (unlimited).
    pub fn from_schema(config: &dyn SchemaConfig) -> Self {
        let mut cfg = Self::default();

        match config.get_string(defaults::KEY_PREDICT_DB) {
            Some(name) => {
                info!(predict_db = %name, "custom {}", defaults::KEY_PREDICT_DB);
                cfg.predict_db = name;
            }
            None => info!("{} is not set in schema", defaults::KEY_PREDICT_DB),
        }

        match config.get_int(defaults::KEY_MAX_CANDIDATES) {
            Some(n) => cfg.max_candidates = usize::try_from(n).unwrap_or(0),
            None => info!("{} is not set in schema", defaults::KEY_MAX_CANDIDATES),
        }

        match config.get_int(defaults::KEY_MAX_ITERATIONS) {
            Some(n) => cfg.max_iterations = u32::try_from(n).unwrap_or(0),
            None => info!("{} is not set in schema", defaults::KEY_MAX_ITERATIONS),
        }

        cfg
    }
}

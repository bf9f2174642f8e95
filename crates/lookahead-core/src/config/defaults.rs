// Single source of truth for all default values.

// --- Schema keys ---
pub const KEY_PREDICT_DB: &str = "predictor/predictdb";
pub const KEY_MAX_CANDIDATES: &str = "predictor/max_candidates";
pub const KEY_MAX_ITERATIONS: &str = "predictor/max_iterations";

// --- Predictor ---
pub const DEFAULT_PREDICT_DB: &str = "predict.userdb";
pub const DEFAULT_MAX_CANDIDATES: usize = 0; // 0 = unlimited
pub const DEFAULT_MAX_ITERATIONS: u32 = 0; // 0 = unlimited

/// Context query used before anything has been committed.
pub const START_OF_INPUT_QUERY: &str = "$";

/// Host option that toggles prediction on and off.
pub const PREDICTION_OPTION: &str = "prediction";

// --- Segment tags ---
pub const PREDICTION_TAG: &str = "prediction";
pub const PLACEHOLDER_TAG: &str = "placeholder";
pub const RAW_TAG: &str = "raw";

// --- Storage ---
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

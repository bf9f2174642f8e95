//! # lookahead-core
//!
//! Foundation crate for the lookahead predictor.
//! Defines the prediction data model, errors, configuration, and the
//! traits through which the host input method is consumed.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{PredictorConfig, Schema, SchemaConfig, TomlSchemaConfig};
pub use errors::{LookaheadError, LookaheadResult};
pub use models::{Candidate, CommitKind, CommitRecord, PredictionList, PredictionRecord, Segment};
pub use traits::{InputContext, ResourceResolver, ResourceType, UserDataResolver};

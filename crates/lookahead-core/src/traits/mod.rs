//! Interfaces to the host input method. The predictor only consumes these.

mod context;
mod resolver;

pub use context::InputContext;
pub use resolver::{ResourceResolver, ResourceType, UserDataResolver, PREDICT_DB_RESOURCE};

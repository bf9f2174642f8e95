//! # lookahead-engine
//!
//! [`PredictionEngine`] wraps one shared prediction store together with the
//! schema's limits and turns lookups into candidate output.
//! [`EngineCache`] shares one engine per schema across sessions.

pub mod engine;
pub mod engine_cache;
pub mod output;

pub use engine::PredictionEngine;
pub use engine_cache::EngineCache;
pub use output::{CandidateIter, CandidateStream};

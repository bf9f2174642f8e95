//! # lookahead-session
//!
//! [`PredictorSession`] is bound to one input context. It reacts to the
//! host's update, select, delete and abort notifications and to dismiss
//! keys, drives the shared [`PredictionEngine`](lookahead_engine::PredictionEngine),
//! and ignores the update notifications caused by its own edits.

pub mod events;
pub mod session;

pub use events::{ContextEvent, KeyEvent, ProcessResult};
pub use session::{LastAction, PredictorSession};

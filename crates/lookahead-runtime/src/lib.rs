//! # lookahead-runtime
//!
//! Wires the predictor into a host process: [`PredictorComponent`] turns a
//! schema and an input context into a [`PredictorSession`](lookahead_session::PredictorSession),
//! and [`tracing_setup`] installs the log subscriber.

pub mod component;
pub mod tracing_setup;

pub use component::PredictorComponent;
pub use tracing_setup::{init_tracing, init_tracing_with_filter};

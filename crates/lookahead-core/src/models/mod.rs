//! Data model shared by the store, engine and session layers.

mod commit;
mod prediction;
mod segment;

pub use commit::{CommitKind, CommitRecord};
pub use prediction::{PredictionList, PredictionRecord};
pub use segment::{Candidate, Segment};

//! # lookahead-storage
//!
//! Durable prediction store. Each context key maps to a packed, ranked
//! prediction list in a single SQLite `WITHOUT ROWID` table.
//!
//! - [`PredictionStore`] owns one connection and implements the
//!   reinforcement update.
//! - [`HandleCache`] shares one live store per location across every
//!   consumer, reopening transparently once all of them let go.

pub mod codec;
pub mod handle_cache;
pub mod migrations;
pub mod pragmas;
pub mod queries;
pub mod store;

pub use handle_cache::HandleCache;
pub use store::PredictionStore;

use lookahead_core::errors::StorageError;
use lookahead_core::LookaheadError;

/// Wrap a SQLite failure message.
pub(crate) fn to_storage_err(message: impl Into<String>) -> LookaheadError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}

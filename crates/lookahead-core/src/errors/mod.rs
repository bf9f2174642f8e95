//! Error taxonomy. Subsystem enums are wrapped by [`LookaheadError`].

mod codec_error;
mod config_error;
mod storage_error;

pub use codec_error::CodecError;
pub use config_error::ConfigError;
pub use storage_error::StorageError;

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum LookaheadError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type LookaheadResult<T> = Result<T, LookaheadError>;

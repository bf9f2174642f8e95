/// Failures decoding a stored prediction list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("unsupported prediction list encoding version {version}")]
    UnsupportedVersion { version: u8 },

    #[error("value truncated at byte {offset}: needed {needed} more bytes")]
    Truncated { offset: usize, needed: usize },

    #[error("word at byte {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    #[error("{remaining} trailing bytes after last record")]
    TrailingBytes { remaining: usize },
}

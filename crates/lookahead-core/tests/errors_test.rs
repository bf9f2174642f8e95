use lookahead_core::errors::{CodecError, ConfigError, LookaheadError, StorageError};

#[test]
fn storage_error_displays_location() {
    let err = StorageError::OpenFailed {
        location: "/tmp/predict.userdb".to_string(),
        reason: "unable to open database file".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "failed to open prediction store at /tmp/predict.userdb: unable to open database file"
    );
}

#[test]
fn subsystem_errors_convert_transparently() {
    let err: LookaheadError = CodecError::TrailingBytes { remaining: 3 }.into();
    assert!(matches!(err, LookaheadError::Codec(_)));
    assert_eq!(err.to_string(), "3 trailing bytes after last record");

    let err: LookaheadError = StorageError::Unavailable.into();
    assert!(matches!(err, LookaheadError::Storage(StorageError::Unavailable)));

    let err: LookaheadError = ConfigError::Parse {
        reason: "bad".to_string(),
    }
    .into();
    assert_eq!(err.to_string(), "failed to parse config: bad");
}

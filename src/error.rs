//! Error taxonomy for the sync pipeline
//!
//! Every fatal condition gets its own variant so the CLI can report a precise
//! message. Nothing here is retried; any error terminates the run before the
//! target file is written.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised by the extract-and-rewrite pipeline
#[derive(Debug, Error)]
pub enum SyncError {
    /// A required object block was not found in the source document.
    /// Raised before the target file is read or written.
    #[error("could not find `{name}` block in source file")]
    MissingBlock { name: String },

    /// A property that failed extraction is required at render time.
    /// The earlier extraction warning and this error share one root cause.
    #[error("property `{key}` is missing from `{block}`; refusing to render an incomplete block")]
    KeyMissing { block: String, key: &'static str },

    /// Source or target file could not be read
    #[error("failed to read {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target file could not be written
    #[error("failed to write {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_block_message_names_block() {
        let err = SyncError::MissingBlock {
            name: "img1Data".to_string(),
        };
        assert!(err.to_string().contains("img1Data"));
    }

    #[test]
    fn test_key_missing_message_names_block_and_key() {
        let err = SyncError::KeyMissing {
            block: "img2Data".to_string(),
            key: "skeleton",
        };
        let msg = err.to_string();
        assert!(msg.contains("img2Data"));
        assert!(msg.contains("skeleton"));
    }

    #[test]
    fn test_read_failed_carries_source() {
        use std::error::Error;

        let err = SyncError::ReadFailed {
            path: PathBuf::from("/tmp/missing.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("/tmp/missing.html"));
        assert!(err.source().is_some());
    }
}

use erc8004_core::ContentKey;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the record store. Document content never produces one of these.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("metadata store I/O error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {kind} record {key}")]
    Encode {
        kind: &'static str,
        key: ContentKey,
        #[source]
        source: serde_json::Error,
    },
    #[error("stored {kind} record at {path} is corrupt")]
    CorruptRecord {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("metadata store lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, MetadataError>;

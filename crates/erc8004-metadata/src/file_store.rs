//! File-backed record store.
//!
//! Layout: one pretty-printed JSON file per record at
//! `<root>/<kind>/<content key>.json`. Inserts write the body to a temp
//! file in the kind directory and publish it with a no-clobber rename, so
//! a record path only ever holds a complete record and an existing file
//! is never replaced.
use crate::error::{MetadataError, Result};
use crate::records::{FeedbackRecord, MetadataRecord, RegistrationRecord};
use crate::store::RecordStore;
use erc8004_core::ContentKey;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

const RECORD_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileMetadataStoreConfig {
    /// Directory holding one sub-directory per record kind.
    pub root: PathBuf,
}

impl FileMetadataStoreConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[derive(Debug, Clone)]
pub struct FileMetadataStore {
    config: FileMetadataStoreConfig,
}

impl FileMetadataStore {
    pub fn new(config: FileMetadataStoreConfig) -> Self {
        Self { config }
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    fn record_path<R: MetadataRecord>(&self, key: &ContentKey) -> PathBuf {
        self.kind_dir::<R>()
            .join(format!("{}.{}", key.as_str(), RECORD_EXTENSION))
    }

    fn kind_dir<R: MetadataRecord>(&self) -> PathBuf {
        self.config.root.join(R::KIND.as_str())
    }

    fn load_record<R: MetadataRecord>(&self, key: &ContentKey) -> Result<Option<R>> {
        let path = self.record_path::<R>(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(MetadataError::Io { path, source }),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| MetadataError::CorruptRecord {
                kind: R::KIND.as_str(),
                path,
                source,
            })
    }

    fn insert_record<R: MetadataRecord>(&self, record: R) -> Result<bool> {
        let dir = self.kind_dir::<R>();
        fs::create_dir_all(&dir).map_err(|source| MetadataError::Io {
            path: dir.clone(),
            source,
        })?;

        let body = serde_json::to_vec_pretty(&record).map_err(|source| MetadataError::Encode {
            kind: R::KIND.as_str(),
            key: record.key().clone(),
            source,
        })?;

        let path = self.record_path::<R>(record.key());
        if path.exists() {
            debug!(path = %path.display(), "Record file already exists");
            return Ok(false);
        }

        // The temp file is removed on drop unless it was persisted.
        let mut staged = NamedTempFile::new_in(&dir).map_err(|source| MetadataError::Io {
            path: dir.clone(),
            source,
        })?;
        staged
            .write_all(&body)
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|source| MetadataError::Io {
                path: staged.path().to_path_buf(),
                source,
            })?;

        match staged.persist_noclobber(&path) {
            Ok(_) => Ok(true),
            Err(err) if err.error.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "Record file already exists");
                Ok(false)
            }
            Err(err) => Err(MetadataError::Io {
                path,
                source: err.error,
            }),
        }
    }
}

impl RecordStore<RegistrationRecord> for FileMetadataStore {
    fn load(&self, key: &ContentKey) -> Result<Option<RegistrationRecord>> {
        self.load_record(key)
    }

    fn insert_if_absent(&self, record: RegistrationRecord) -> Result<bool> {
        self.insert_record(record)
    }
}

impl RecordStore<FeedbackRecord> for FileMetadataStore {
    fn load(&self, key: &ContentKey) -> Result<Option<FeedbackRecord>> {
        self.load_record(key)
    }

    fn insert_if_absent(&self, record: FeedbackRecord) -> Result<bool> {
        self.insert_record(record)
    }
}

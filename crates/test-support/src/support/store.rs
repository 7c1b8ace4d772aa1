use erc8004_metadata::{FileMetadataStore, FileMetadataStoreConfig};
use tempfile::TempDir;

/// File store rooted in a fresh temporary directory. Keep the `TempDir` alive.
pub fn temp_file_store() -> (TempDir, FileMetadataStore) {
    let dir = tempfile::tempdir().expect("create temp store dir");
    let store = FileMetadataStore::new(FileMetadataStoreConfig::new(dir.path()));
    (dir, store)
}

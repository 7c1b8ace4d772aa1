//! Normalization of ERC-8004 metadata documents.
//!
//! This crate turns untrusted registration and feedback JSON documents
//! into write-once records keyed by content identifier, along with a
//! pluggable storage interface, an in-memory implementation and a
//! file-backed one.

pub mod error;
pub mod vocabulary;
pub mod extract;
pub mod wallet;
pub mod endpoints;
pub mod records;
pub mod normalizer;
pub mod registration;
pub mod feedback;
pub mod store;
pub mod file_store;

pub use error::{MetadataError, Result};
pub use endpoints::{apply_endpoints, EndpointEntry, EndpointKind};
pub use extract::{FieldError, FieldReader, JsonKind};
pub use feedback::{index_feedback, parse_feedback, FeedbackContext};
pub use file_store::{FileMetadataStore, FileMetadataStoreConfig};
pub use normalizer::{index_document, DocumentContext, IndexOutcome};
pub use records::{FeedbackRecord, MetadataRecord, ParseStatus, RecordKind, RegistrationRecord};
pub use registration::{index_registration, parse_registration, RegistrationContext};
pub use store::{InMemoryMetadataStore, MetadataStore, RecordStore};
pub use wallet::{parse_wallet_reference, WalletReference};

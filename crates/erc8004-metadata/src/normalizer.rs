//! Write-once normalization of metadata documents.
//!
//! A document moves from unseen to persisted exactly once per content key:
//! - the store is checked first and a hit ends the call without parsing;
//! - otherwise the bytes are decoded and normalized into a record (a stub
//!   when decoding fails) and written with an atomic insert-if-absent.
//!
//! Document content never produces an error. Only store failures surface.

use crate::error::Result;
use crate::extract::{JsonKind, Object};
use crate::records::{MetadataRecord, ParseStatus};
use crate::store::RecordStore;
use erc8004_core::ContentKey;
use erc8004_observability::spans;
use serde_json::Value;
use tracing::{error, info};

/// What an indexing call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOutcome {
    /// A new record was written with the given parse status.
    Persisted(ParseStatus),
    /// A record already existed for the key; nothing was written.
    AlreadyIndexed,
}

impl IndexOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, IndexOutcome::Persisted(_))
    }
}

/// Per-call parameters supplied by the chain-event layer for one document.
pub trait DocumentContext {
    type Record: MetadataRecord;

    fn key(&self) -> &ContentKey;

    /// Owning on-chain entity id, for logs.
    fn owner(&self) -> &str;

    /// Normalize raw bytes into a record. Infallible: bad input yields a stub.
    fn normalize(&self, content: &[u8]) -> Self::Record;
}

/// Normalize and persist a document unless its key is already indexed.
pub fn index_document<C, S>(store: &S, context: &C, content: &[u8]) -> Result<IndexOutcome>
where
    C: DocumentContext,
    S: RecordStore<C::Record> + ?Sized,
{
    let kind = C::Record::KIND.as_str();
    let span = spans::normalize_document(kind, context.key());
    let _guard = span.enter();

    info!(owner = context.owner(), "Parsing {} file", kind);

    if store.load(context.key())?.is_some() {
        info!(owner = context.owner(), "{} file already indexed", kind);
        return Ok(IndexOutcome::AlreadyIndexed);
    }

    let record = context.normalize(content);
    let status = record.parse_status();
    if store.insert_if_absent(record)? {
        info!(owner = context.owner(), status = status.as_str(), "{} file indexed", kind);
        Ok(IndexOutcome::Persisted(status))
    } else {
        info!(owner = context.owner(), "{} file already exists, skipping save", kind);
        Ok(IndexOutcome::AlreadyIndexed)
    }
}

/// Decode document bytes into a top-level JSON object.
///
/// On failure returns the stub status to record; the failure is logged here.
pub(crate) fn decode_object(
    content: &[u8],
    key: &ContentKey,
    kind: &'static str,
) -> std::result::Result<Object, ParseStatus> {
    match serde_json::from_slice::<Value>(content) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => {
            error!(
                %key,
                found = %JsonKind::of(&other),
                "JSON value is not an object for {} file",
                kind
            );
            Err(ParseStatus::NotAnObject)
        }
        Err(err) => {
            error!(%key, error = %err, "Failed to parse JSON for {} file", kind);
            Err(ParseStatus::InvalidJson)
        }
    }
}

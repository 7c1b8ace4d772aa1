//! Span constructors for document processing.
//!
//! Field names stay stable so log pipelines can group by `key` and `kind`.

use erc8004_core::ContentKey;
use std::path::Path;
use tracing::{info_span, Span};

/// Span covering one normalization attempt for a content key.
#[inline]
pub fn normalize_document(kind: &'static str, key: &ContentKey) -> Span {
    info_span!("normalize_document", kind, key = %key)
}

/// Span covering reading a raw document from disk.
#[inline]
pub fn load_document(path: &Path) -> Span {
    info_span!("load_document", path = %path.display())
}

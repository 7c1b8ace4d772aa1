//! Strongly-typed ID wrappers for domain concepts.
//!
//! These newtypes prevent mixing content keys with the owning entity ids
//! they are stored next to.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_CONTENT_KEY_LEN: usize = 256;

macro_rules! define_id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id_type!(
    /// Content identifier of a metadata document (usually an IPFS CID).
    ///
    /// Primary key and dedup token for stored records.
    ContentKey
);
define_id_type!(
    /// On-chain agent identifier that owns a registration document.
    AgentId
);
define_id_type!(
    /// On-chain feedback identifier that owns a feedback document.
    FeedbackId
);

impl ContentKey {
    /// Validate a raw key.
    ///
    /// Keys double as file names in the file-backed store, so only ASCII
    /// alphanumerics plus `-`, `_` and `.` are accepted.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let reason = if raw.is_empty() {
            Some("must not be empty")
        } else if raw.len() > MAX_CONTENT_KEY_LEN {
            Some("longer than 256 bytes")
        } else if raw == "." || raw == ".." {
            Some("reserved path component")
        } else if !raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
        {
            Some("contains characters outside [A-Za-z0-9._-]")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(CoreError::InvalidContentKey { key: raw, reason }),
            None => Ok(Self(raw)),
        }
    }
}

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl FeedbackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

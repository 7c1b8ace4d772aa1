//! Error types for the ERC-8004 core primitives
//!
//! Covers the few constructors in this crate that validate their input.
//! Everything else here is a total function.

use thiserror::Error;

/// Main error type for core identifiers and addresses
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Content key is empty, too long, or contains characters outside the allowed set
    #[error("Invalid content key '{key}': {reason}")]
    InvalidContentKey { key: String, reason: &'static str },

    /// Address string is not `0x` followed by 40 hex digits
    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    /// Address hex digits failed to decode
    #[error("Invalid address hex '{value}'")]
    AddressHex {
        value: String,
        #[source]
        source: hex::FromHexError,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CoreError>;

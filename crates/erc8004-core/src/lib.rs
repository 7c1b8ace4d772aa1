//! Core primitives shared by the ERC-8004 metadata crates.
//!
//! Provides account addresses, identifier newtypes and the static
//! registry-address table.

pub mod address;
pub mod chain;
pub mod error;
pub mod ids;

pub use address::Address;
pub use chain::ContractAddresses;
pub use error::{CoreError, Result};
pub use ids::{AgentId, ContentKey, FeedbackId};

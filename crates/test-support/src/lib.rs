//! Shared fixtures and helpers for ERC-8004 integration tests.

pub mod common;
pub mod support;

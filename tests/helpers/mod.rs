//! Shared helpers for the integration tests.

pub mod fixtures;
pub mod resolver_helpers;

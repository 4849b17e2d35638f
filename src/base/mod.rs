//! Foundation types for the import engine.
//!
//! This module provides the primitives used throughout the crate:
//! - Language constants (base types, default packages, group prefixes)
//! - Identifier and qualified-name helpers
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod names;

pub use constants::is_base_type;
pub use names::{
    is_identifier, is_identifier_continue, is_identifier_start, join_qualified,
    normalize_separators, split_qualified,
};

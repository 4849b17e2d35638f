//! Error types for reference and import handling.
//!
//! Resolution itself never fails: every ambiguity is settled by qualifying the
//! name. These errors only report precondition violations on the inputs
//! (malformed reference text, unparsable seed imports) and are raised before
//! any table state is touched.

use thiserror::Error;

/// Errors raised while building a [`Reference`](crate::reference::Reference)
/// or tokenizing raw reference text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The candidate name was empty or whitespace.
    #[error("Empty reference name")]
    Empty,

    /// A dotted name contained an empty segment (`a..b`, `.a`, `a.`).
    #[error("Empty segment in qualified name: {0}")]
    EmptySegment(String),

    /// A segment is not a valid identifier.
    #[error("Invalid identifier '{segment}' in {name}")]
    InvalidIdentifier { name: String, segment: String },

    /// Angle brackets do not balance.
    #[error("Unbalanced type arguments in {0}")]
    Unbalanced(String),

    /// Unexpected character while tokenizing.
    #[error("Unexpected '{found}' at offset {offset} in {text}")]
    Unexpected {
        text: String,
        found: char,
        offset: usize,
    },
}

impl ReferenceError {
    /// Create an invalid identifier error.
    pub fn invalid_identifier(name: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            segment: segment.into(),
        }
    }

    /// Create an unexpected character error.
    pub fn unexpected(text: impl Into<String>, found: char, offset: usize) -> Self {
        Self::Unexpected {
            text: text.into(),
            found,
            offset,
        }
    }
}

/// Errors raised while seeding an import table from a pre-existing unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The line is not an import declaration.
    #[error("Not an import declaration: {0}")]
    NotAnImport(String),

    /// A static import must name a member of a type (`import static a.B.m;`).
    #[error("Static import without owner type: {0}")]
    MissingOwner(String),

    /// The imported name itself is malformed.
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

impl ImportError {
    /// Create a not-an-import error.
    pub fn not_an_import(line: impl Into<String>) -> Self {
        Self::NotAnImport(line.into())
    }
}

/// Errors raised while loading an [`ImportConfig`](crate::config::ImportConfig).
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

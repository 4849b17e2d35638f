//! The per-occurrence reference descriptor.

use std::fmt;

use smol_str::SmolStr;

use crate::base::{is_base_type, is_identifier, normalize_separators, split_qualified};
use crate::error::ReferenceError;

/// One occurrence of a fully-qualified name, as seen by the import engine.
///
/// Built once per occurrence and never mutated. Nested-type separators are
/// normalized to the package separator, so `a.b.Outer$Inner` and
/// `a.b.Outer.Inner` produce equal references.
///
/// Base types (`int`, `void`, ...) only carry their simple name; every other
/// field is empty so no downstream rule can import or qualify them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    simple_name: SmolStr,
    qualifier: Option<SmolStr>,
    fully_qualified_name: SmolStr,
    is_base_type: bool,
    is_type_argument: bool,
}

impl Reference {
    /// Build a reference found outside any type-argument list.
    pub fn new(name: &str) -> Result<Self, ReferenceError> {
        Self::with_position(name, false)
    }

    /// Build a reference found inside a type-argument list.
    pub fn type_argument(name: &str) -> Result<Self, ReferenceError> {
        Self::with_position(name, true)
    }

    /// Build a reference, flagging whether it sits in a type-argument position.
    pub fn with_position(name: &str, is_type_argument: bool) -> Result<Self, ReferenceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ReferenceError::Empty);
        }

        if is_base_type(name) {
            return Ok(Self {
                simple_name: SmolStr::new(name),
                qualifier: None,
                fully_qualified_name: SmolStr::default(),
                is_base_type: true,
                is_type_argument: false,
            });
        }

        let normalized = normalize_separators(name);
        for segment in normalized.split('.') {
            if segment.is_empty() {
                return Err(ReferenceError::EmptySegment(name.to_string()));
            }
            if !is_identifier(segment) {
                return Err(ReferenceError::invalid_identifier(name, segment));
            }
        }

        let (qualifier, simple_name) = split_qualified(&normalized);
        Ok(Self {
            simple_name: SmolStr::new(simple_name),
            qualifier: qualifier.map(SmolStr::new),
            fully_qualified_name: SmolStr::new(&normalized),
            is_base_type: false,
            is_type_argument,
        })
    }

    /// The last segment of the name.
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Everything before the simple name, if anything.
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// The qualifier, or `""` for unqualified names.
    pub fn qualifier_or_empty(&self) -> &str {
        self.qualifier.as_deref().unwrap_or("")
    }

    /// Qualifier and simple name, normalized. Empty for base types.
    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    pub fn is_base_type(&self) -> bool {
        self.is_base_type
    }

    pub fn is_type_argument(&self) -> bool {
        self.is_type_argument
    }

    /// True when the name needs no import decision at all.
    ///
    /// Base types and names without a qualifier (type variables, names in
    /// the default package) always print as their simple name.
    pub fn is_always_simple(&self) -> bool {
        self.is_base_type || self.qualifier.is_none()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_base_type {
            f.write_str(&self.simple_name)
        } else {
            f.write_str(&self.fully_qualified_name)
        }
    }
}

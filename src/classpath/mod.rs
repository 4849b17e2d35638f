//! Classpath collaborator: what the scope layers may ask about other types.
//!
//! The engine never scans a classpath itself. Hosts implement [`Classpath`]
//! over whatever environment they have; [`ClasspathIndex`] is an in-memory
//! implementation and [`CachedClasspath`] memoizes any implementation.

mod cached;
mod index;

use std::sync::Arc;

use smol_str::SmolStr;

pub use cached::CachedClasspath;
pub use index::ClasspathIndex;

/// What a type declares that matters for visibility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeMembers {
    /// Direct superclass and implemented/extended interfaces, fully qualified.
    pub supertypes: Vec<SmolStr>,
    /// Simple names of the nested types it declares.
    pub nested_types: Vec<SmolStr>,
}

impl TypeMembers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_supertype(mut self, qualified_name: impl Into<SmolStr>) -> Self {
        self.supertypes.push(qualified_name.into());
        self
    }

    pub fn with_nested(mut self, simple_name: impl Into<SmolStr>) -> Self {
        self.nested_types.push(simple_name.into());
        self
    }
}

/// Lookups against the effective classpath of the generated code.
///
/// Implementations must be side-effect-free. The engine asks at most once per
/// distinct simple name or ancestor per unit.
pub trait Classpath: Send + Sync {
    /// Check if a type with this fully qualified name exists.
    fn exists_in_package(&self, qualified_name: &str) -> bool;

    /// Direct supertypes and nested type names of a type, if it is known.
    fn type_members(&self, qualified_name: &str) -> Option<TypeMembers>;
}

impl<C: Classpath + ?Sized> Classpath for Arc<C> {
    fn exists_in_package(&self, qualified_name: &str) -> bool {
        (**self).exists_in_package(qualified_name)
    }

    fn type_members(&self, qualified_name: &str) -> Option<TypeMembers> {
        (**self).type_members(qualified_name)
    }
}

impl<C: Classpath + ?Sized> Classpath for &C {
    fn exists_in_package(&self, qualified_name: &str) -> bool {
        (**self).exists_in_package(qualified_name)
    }

    fn type_members(&self, qualified_name: &str) -> Option<TypeMembers> {
        (**self).type_members(qualified_name)
    }
}

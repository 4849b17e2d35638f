use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{Classpath, TypeMembers};
use crate::base::normalize_separators;

/// In-memory classpath: fully qualified name → declared members.
///
/// Names are normalized on insert and lookup, so `a.Outer$Inner` and
/// `a.Outer.Inner` address the same type.
#[derive(Clone, Debug, Default)]
pub struct ClasspathIndex {
    types: FxHashMap<SmolStr, TypeMembers>,
}

impl ClasspathIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a type.
    pub fn insert(&mut self, qualified_name: &str, members: TypeMembers) {
        let name = SmolStr::new(normalize_separators(qualified_name));
        // Nested types are types too
        for nested in &members.nested_types {
            let nested_name = SmolStr::new(format!("{}.{}", name, nested));
            self.types.entry(nested_name).or_default();
        }
        self.types.insert(name, members);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_type(mut self, qualified_name: &str, members: TypeMembers) -> Self {
        self.insert(qualified_name, members);
        self
    }

    /// Add a type that declares nothing of interest.
    pub fn with_plain_type(self, qualified_name: &str) -> Self {
        self.with_type(qualified_name, TypeMembers::default())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Classpath for ClasspathIndex {
    fn exists_in_package(&self, qualified_name: &str) -> bool {
        self.types
            .contains_key(normalize_separators(qualified_name).as_str())
    }

    fn type_members(&self, qualified_name: &str) -> Option<TypeMembers> {
        self.types
            .get(normalize_separators(qualified_name).as_str())
            .cloned()
    }
}

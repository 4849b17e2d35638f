use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::ScopeLayer;
use crate::classpath::Classpath;
use crate::config::ImportConfig;
use crate::error::ReferenceError;
use crate::imports::Decision;
use crate::reference::Reference;

// ============================================================================
// TYPE MODEL
// ============================================================================

/// The declaration of a type being emitted, as far as visibility cares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeModel {
    pub qualified_name: SmolStr,
    pub superclass: Option<SmolStr>,
    pub interfaces: Vec<SmolStr>,
    /// Simple names of the nested types the model declares.
    pub nested_types: Vec<SmolStr>,
}

impl TypeModel {
    pub fn new(qualified_name: impl Into<SmolStr>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Self::default()
        }
    }

    pub fn extends(mut self, superclass: impl Into<SmolStr>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<SmolStr>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_nested(mut self, simple_name: impl Into<SmolStr>) -> Self {
        self.nested_types.push(simple_name.into());
        self
    }

    /// Superclass first, then interfaces in declaration order.
    pub fn supertypes(&self) -> impl Iterator<Item = &SmolStr> {
        self.superclass.iter().chain(self.interfaces.iter())
    }
}

// ============================================================================
// ENCLOSING TYPE SCOPE
// ============================================================================

/// Visibility inside the body of a type.
///
/// Two sets are computed once, at construction:
/// - *ancestors*: the type itself and every supertype reachable from it,
///   excluding the root type. Members of an ancestor print as simple names.
/// - *enclosed names*: the type's own simple name, the nested types it
///   declares, and the nested types of every ancestor. Any other type with one
///   of these simple names must be qualified.
///
/// A nested type the type declares itself hides an inherited nested type of
/// the same simple name, so the inherited one is qualified.
pub struct EnclosingTypeScope {
    own: Reference,
    ancestors: FxHashSet<SmolStr>,
    /// Nested types declared by the type itself.
    declared: FxHashSet<SmolStr>,
    enclosed: FxHashSet<SmolStr>,
}

impl EnclosingTypeScope {
    pub fn new(
        model: &TypeModel,
        classpath: &dyn Classpath,
        config: &ImportConfig,
    ) -> Result<Self, ReferenceError> {
        let own = Reference::new(&model.qualified_name)?;

        let mut declared: FxHashSet<SmolStr> = model.nested_types.iter().cloned().collect();
        if let Some(members) = classpath.type_members(own.fully_qualified_name()) {
            declared.extend(members.nested_types);
        }

        let mut enclosed = declared.clone();
        enclosed.insert(SmolStr::new(own.simple_name()));

        let mut ancestors = FxHashSet::default();
        ancestors.insert(SmolStr::new(own.fully_qualified_name()));

        // Breadth-first over supertypes; the model speaks for the type itself
        let mut pending: VecDeque<SmolStr> = VecDeque::new();
        for supertype in model.supertypes() {
            pending.push_back(SmolStr::new(Reference::new(supertype)?.fully_qualified_name()));
        }
        while let Some(ancestor) = pending.pop_front() {
            if config.is_root_type(&ancestor) || !ancestors.insert(ancestor.clone()) {
                continue;
            }
            let Some(members) = classpath.type_members(&ancestor) else {
                continue;
            };
            enclosed.extend(members.nested_types);
            for supertype in &members.supertypes {
                pending.push_back(SmolStr::new(Reference::new(supertype)?.fully_qualified_name()));
            }
        }

        tracing::debug!(
            "[SCOPE] enclosing type '{}': {} ancestor(s), {} enclosed name(s)",
            own,
            ancestors.len(),
            enclosed.len()
        );
        Ok(Self {
            own,
            ancestors,
            declared,
            enclosed,
        })
    }

    /// Check if `qualified_name` is the type itself or one of its supertypes.
    pub fn is_ancestor(&self, qualified_name: &str) -> bool {
        self.ancestors.contains(qualified_name)
    }

    /// Check if `simple_name` names a type visible inside this body.
    pub fn encloses(&self, simple_name: &str) -> bool {
        self.enclosed.contains(simple_name)
    }

    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        self.ancestors.iter().map(SmolStr::as_str)
    }
}

impl ScopeLayer for EnclosingTypeScope {
    fn qualifier(&self) -> &str {
        self.own.fully_qualified_name()
    }

    fn check(&self, reference: &Reference) -> Decision {
        if reference.is_base_type()
            || reference.fully_qualified_name() == self.own.fully_qualified_name()
        {
            return Decision::Simple;
        }
        if let Some(qualifier) = reference.qualifier().filter(|q| self.is_ancestor(q)) {
            // Inherited member hidden by one the type declares itself
            if qualifier != self.own.fully_qualified_name()
                && self.declared.contains(reference.simple_name())
            {
                return Decision::Qualified;
            }
            return Decision::Simple;
        }
        if self.encloses(reference.simple_name()) {
            return Decision::Qualified;
        }
        Decision::Undecided
    }

    fn shadows_import(&self, reference: &Reference) -> bool {
        self.check(reference) == Decision::Qualified
    }
}

impl fmt::Debug for EnclosingTypeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnclosingTypeScope")
            .field("type", &self.own.fully_qualified_name())
            .field("ancestors", &self.ancestors.len())
            .field("enclosed", &self.enclosed.len())
            .finish()
    }
}

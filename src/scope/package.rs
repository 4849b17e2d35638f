use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::ScopeLayer;
use crate::base::join_qualified;
use crate::classpath::Classpath;
use crate::imports::Decision;
use crate::reference::Reference;

/// Visibility granted by the unit's own package.
///
/// - A reference in the unit's package prints as its simple name.
/// - A reference from another package is forced to its qualified name when a
///   type of the same simple name exists in the unit's package, since the
///   simple name would resolve to that sibling instead.
///
/// The sibling check goes to the classpath once per simple name; answers are
/// cached for the life of the layer, which belongs to exactly one unit.
pub struct UnitPackageScope {
    package: SmolStr,
    classpath: Arc<dyn Classpath>,
    /// SimpleName → "a type of that name exists in this package"
    siblings: RwLock<FxHashMap<SmolStr, bool>>,
}

impl UnitPackageScope {
    /// Create the layer for a unit in `package` (`""` for the default package).
    pub fn new(package: impl Into<SmolStr>, classpath: Arc<dyn Classpath>) -> Self {
        Self {
            package: package.into(),
            classpath,
            siblings: RwLock::new(FxHashMap::default()),
        }
    }

    /// Check if the unit's package declares a type named `simple_name`.
    pub fn has_sibling(&self, simple_name: &str) -> bool {
        if let Some(&known) = self.siblings.read().get(simple_name) {
            return known;
        }

        let mut siblings = self.siblings.write();
        *siblings
            .entry(SmolStr::new(simple_name))
            .or_insert_with(|| {
                self.classpath
                    .exists_in_package(&join_qualified(&self.package, simple_name))
            })
    }
}

impl ScopeLayer for UnitPackageScope {
    fn qualifier(&self) -> &str {
        &self.package
    }

    fn check(&self, reference: &Reference) -> Decision {
        if reference.is_base_type() || reference.qualifier_or_empty() == self.package {
            return Decision::Simple;
        }
        if self.has_sibling(reference.simple_name()) {
            tracing::trace!(
                "[SCOPE] '{}' shadowed by a type in package '{}'",
                reference,
                self.package
            );
            return Decision::Qualified;
        }
        Decision::Undecided
    }
}

impl fmt::Debug for UnitPackageScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitPackageScope")
            .field("package", &self.package)
            .field("cached", &self.siblings.read().len())
            .finish()
    }
}

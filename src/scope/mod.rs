//! Scope layers: "is this name visible without import right here?"
//!
//! A [`ScopeChain`] is an ordered list of [`ScopeLayer`]s, innermost lexical
//! scope first. Each layer answers from its own policy or stays
//! [`Decision::Undecided`] so the next layer is asked; the chain bottoms out
//! at [`ImportTable::check_current_scope`].
//!
//! ```text
//! EnclosingTypeScope(a.b.Outer.Inner)   ← asked first
//!     │
//! EnclosingTypeScope(a.b.Outer)
//!     │
//! UnitPackageScope(a.b)
//!     │
//! ImportTable                           ← always undecided
//! ```
//!
//! Chains are persistent: [`ScopeChain::wrap`] returns a new chain sharing the
//! old one as its tail, so entering a nested scope never disturbs the chain
//! that is restored on exit.

mod enclosing;
mod package;

use std::fmt;
use std::sync::Arc;

use crate::imports::{Decision, ImportTable};
use crate::reference::Reference;

pub use enclosing::{EnclosingTypeScope, TypeModel};
pub use package::UnitPackageScope;

// ============================================================================
// SCOPE LAYER
// ============================================================================

/// One lexical scope's visibility policy.
pub trait ScopeLayer: Send + Sync + fmt::Debug {
    /// The package or type this layer stands for.
    fn qualifier(&self) -> &str;

    /// Decide `reference` from this layer's policy alone.
    fn check(&self, reference: &Reference) -> Decision;

    /// True when a member visible in this scope hides an import of
    /// `reference`'s simple name (inherited nested types do this).
    fn shadows_import(&self, _reference: &Reference) -> bool {
        false
    }
}

// ============================================================================
// SCOPE CHAIN
// ============================================================================

struct ChainNode {
    layer: Arc<dyn ScopeLayer>,
    next: Option<Arc<ChainNode>>,
}

/// Ordered layers consulted before the import table, innermost first.
#[derive(Clone, Default)]
pub struct ScopeChain {
    head: Option<Arc<ChainNode>>,
}

impl ScopeChain {
    /// A chain with no layers: every scope question falls through to the table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new chain that asks `layer` first, then this chain.
    pub fn wrap(&self, layer: impl ScopeLayer + 'static) -> Self {
        self.wrap_arc(Arc::new(layer))
    }

    /// Like [`wrap`](Self::wrap) for a layer that is already shared.
    pub fn wrap_arc(&self, layer: Arc<dyn ScopeLayer>) -> Self {
        Self {
            head: Some(Arc::new(ChainNode {
                layer,
                next: self.head.clone(),
            })),
        }
    }

    /// The chain without its first layer.
    pub fn parent(&self) -> Option<Self> {
        self.head.as_ref().map(|node| Self {
            head: node.next.clone(),
        })
    }

    /// Layers in consultation order.
    pub fn layers(&self) -> impl Iterator<Item = &dyn ScopeLayer> {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| node.layer.as_ref())
    }

    pub fn depth(&self) -> usize {
        self.layers().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The qualifier of the innermost layer.
    pub fn qualifier(&self) -> Option<&str> {
        self.head.as_ref().map(|node| node.layer.qualifier())
    }

    /// Ask each layer in turn, then the table.
    pub fn check_current_scope(&self, table: &ImportTable, reference: &Reference) -> Decision {
        for layer in self.layers() {
            let decision = layer.check(reference);
            if decision.is_decided() {
                tracing::trace!(
                    "[SCOPE] '{}' -> {:?} by layer '{}'",
                    reference,
                    decision,
                    layer.qualifier()
                );
                return decision;
            }
        }
        table.check_current_scope(reference)
    }

    /// True when some layer hides an import of `reference`'s simple name
    /// before any layer makes the reference itself visible.
    pub fn shadows_import(&self, reference: &Reference) -> bool {
        for layer in self.layers() {
            if layer.check(reference) == Decision::Simple {
                return false;
            }
            if layer.shadows_import(reference) {
                return true;
            }
        }
        false
    }

    /// Check if both chains are the very same chain.
    pub fn ptr_eq(&self, other: &ScopeChain) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for ScopeChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.layers()).finish()
    }
}

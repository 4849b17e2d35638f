//! The resolver façade: raw reference text in, printable text out.
//!
//! ## Key Types
//!
//! - [`Resolver`] - owns one unit's [`ImportTable`] and its active
//!   [`ScopeChain`]; resolves every name of a reference through them
//!
//! ## Resolution order (per name)
//!
//! ```text
//! ImportTable::check_existing_imports
//!     │ undecided
//!     ▼
//! ScopeChain::check_current_scope  (innermost layer first)
//!     │ undecided
//!     ▼
//! ImportTable::register_element    (new import, marked used)
//! ```

use crate::base::is_identifier;
use crate::classpath::Classpath;
use crate::error::ReferenceError;
use crate::imports::{Decision, ImportLine, ImportTable, render_lines};
use crate::reference::{Reference, TypeExpr};
use crate::scope::{EnclosingTypeScope, ScopeChain, TypeModel};

// ============================================================================
// RESOLVER
// ============================================================================

/// Resolves references for one generation unit.
///
/// Not meant to be shared: one resolver per unit, driven by one thread.
#[derive(Debug)]
pub struct Resolver {
    table: ImportTable,
    chain: ScopeChain,
}

impl Resolver {
    /// A resolver with no scope layers; only the table decides.
    pub fn new(table: ImportTable) -> Self {
        Self::with_chain(table, ScopeChain::new())
    }

    pub fn with_chain(table: ImportTable, chain: ScopeChain) -> Self {
        Self { table, chain }
    }

    /// The active scope chain.
    pub fn chain(&self) -> &ScopeChain {
        &self.chain
    }

    pub fn table(&self) -> &ImportTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut ImportTable {
        &mut self.table
    }

    pub fn into_table(self) -> ImportTable {
        self.table
    }

    // ------------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------------

    /// Resolve raw reference text, such as `java.util.Map<a.K, a.V>[]`.
    ///
    /// Every name is validated before any of them is resolved, so a malformed
    /// reference leaves the table untouched.
    pub fn resolve(&mut self, raw: &str) -> Result<String, ReferenceError> {
        self.resolve_at(raw, false)
    }

    /// Like [`resolve`](Self::resolve) for text that itself sits inside a
    /// type-argument list.
    pub fn resolve_type_argument(&mut self, raw: &str) -> Result<String, ReferenceError> {
        self.resolve_at(raw, true)
    }

    fn resolve_at(&mut self, raw: &str, is_type_argument: bool) -> Result<String, ReferenceError> {
        let expr = TypeExpr::parse(raw)?;
        for (name, in_argument) in expr.names() {
            Reference::with_position(name, in_argument)?;
        }

        expr.render_with(
            is_type_argument,
            &mut |name: &str, in_argument: bool| -> Result<String, ReferenceError> {
                let reference = Reference::with_position(name, in_argument)?;
                Ok(self.resolve_reference(&reference))
            },
        )
    }

    /// Decide one already-built reference and return the text to print.
    pub fn resolve_reference(&mut self, reference: &Reference) -> String {
        let decision = match self.table.check_existing_imports(reference) {
            Decision::Simple
                if !reference.is_always_simple() && self.chain.shadows_import(reference) =>
            {
                tracing::trace!("[RESOLVE] '{}' import shadowed by enclosing type", reference);
                Decision::Qualified
            }
            Decision::Undecided => self.resolve_in_scope(reference),
            decided => {
                tracing::trace!("[RESOLVE] '{}' -> {:?} by existing imports", reference, decided);
                decided
            }
        };
        decision
            .render(reference)
            .unwrap_or_else(|| reference.fully_qualified_name().to_string())
    }

    fn resolve_in_scope(&mut self, reference: &Reference) -> Decision {
        match self.chain.check_current_scope(&self.table, reference) {
            Decision::Simple => {
                // Outside this scope the same type no longer has a free pass
                let offer_import = reference.is_type_argument()
                    && self.chain.qualifier() == reference.qualifier();
                self.table.register_element(reference, offer_import);
                tracing::trace!(
                    "[RESOLVE] '{}' -> Simple by scope (import offered: {})",
                    reference,
                    offer_import
                );
                Decision::Simple
            }
            Decision::Qualified => {
                tracing::trace!("[RESOLVE] '{}' -> Qualified by scope", reference);
                Decision::Qualified
            }
            Decision::Undecided => {
                self.table.register_element(reference, true);
                tracing::trace!("[RESOLVE] '{}' -> Simple by new import", reference);
                Decision::Simple
            }
        }
    }

    /// Resolve a static member access `owner.member`.
    ///
    /// Prints the bare member when a static import of it from `owner` exists,
    /// otherwise the resolved owner followed by `.member`. Static imports are
    /// never created here.
    pub fn resolve_static(&mut self, owner: &str, member: &str) -> Result<String, ReferenceError> {
        let owner = Reference::new(owner)?;
        if !is_identifier(member) {
            return Err(ReferenceError::invalid_identifier(member, member));
        }

        if self.table.check_static_import(&owner, member) == Decision::Simple {
            self.table.mark_static_used(member);
            tracing::trace!("[RESOLVE] '{}.{}' -> static import", owner, member);
            return Ok(member.to_string());
        }
        let owner_text = self.resolve_reference(&owner);
        Ok(format!("{}.{}", owner_text, member))
    }

    // ------------------------------------------------------------------------
    // Scoped substitution
    // ------------------------------------------------------------------------

    /// Run `body` with the chain returned by `derive` installed.
    ///
    /// The previous chain is reinstalled when `body` returns or unwinds.
    /// Calls nest; each one restores exactly the chain it replaced.
    pub fn run_with_scope<D, B, R>(&mut self, derive: D, body: B) -> R
    where
        D: FnOnce(&ScopeChain) -> ScopeChain,
        B: FnOnce(&mut Resolver) -> R,
    {
        let installed = derive(&self.chain);
        let previous = std::mem::replace(&mut self.chain, installed);
        let guard = ScopeGuard {
            resolver: self,
            previous,
        };
        body(&mut *guard.resolver)
    }

    /// Run `body` inside the body of the type described by `model`.
    pub fn run_in_type<B, R>(
        &mut self,
        model: &TypeModel,
        classpath: &dyn Classpath,
        body: B,
    ) -> Result<R, ReferenceError>
    where
        B: FnOnce(&mut Resolver) -> R,
    {
        let layer = EnclosingTypeScope::new(model, classpath, self.table.config())?;
        Ok(self.run_with_scope(|chain| chain.wrap(layer), body))
    }

    // ------------------------------------------------------------------------
    // Emission
    // ------------------------------------------------------------------------

    /// The unit's import block, see [`ImportTable::create_import_declarations`].
    pub fn import_declarations(&self, include_existing: bool) -> Vec<ImportLine> {
        self.table.create_import_declarations(include_existing)
    }

    /// The unit's import block as printable lines, blank lines between groups.
    pub fn import_lines(&self, include_existing: bool) -> Vec<String> {
        render_lines(&self.import_declarations(include_existing))
    }
}

/// Puts the saved chain back on drop.
struct ScopeGuard<'a> {
    resolver: &'a mut Resolver,
    previous: ScopeChain,
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.resolver.chain = std::mem::take(&mut self.previous);
    }
}

use std::cmp::Ordering;
use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::declaration::{ImportDeclaration, ImportLine};
use super::decision::Decision;
use super::record::ImportRecord;
use crate::base::is_identifier;
use crate::config::ImportConfig;
use crate::error::ReferenceError;
use crate::reference::Reference;

// ============================================================================
// IMPORT TABLE
// ============================================================================

/// Ground-truth symbol table for one generation unit.
///
/// Maps each simple name to exactly one chosen import, with a separate map for
/// static member imports. The table is owned by a single unit and never shared.
///
/// Callers consult [`check_existing_imports`](Self::check_existing_imports)
/// before [`register_element`](Self::register_element): registering a name
/// already bound to another package replaces that binding.
#[derive(Clone, Debug)]
pub struct ImportTable {
    /// The unit's package; `""` for the default package.
    package: SmolStr,
    config: Arc<ImportConfig>,
    /// SimpleName → record (IndexMap keeps registration order for debugging).
    imports: IndexMap<SmolStr, ImportRecord>,
    /// MemberName → record
    static_imports: IndexMap<SmolStr, ImportRecord>,
}

impl ImportTable {
    /// Create an empty table for a unit in `package`.
    ///
    /// Fails if the package name is malformed; `""` denotes the default package.
    pub fn new(
        package: impl Into<SmolStr>,
        config: Arc<ImportConfig>,
    ) -> Result<Self, ReferenceError> {
        let package = package.into();
        if !package.is_empty() {
            for segment in package.split('.') {
                if segment.is_empty() {
                    return Err(ReferenceError::EmptySegment(package.to_string()));
                }
                if !is_identifier(segment) {
                    return Err(ReferenceError::invalid_identifier(package.as_str(), segment));
                }
            }
        }
        Ok(Self {
            package,
            config,
            imports: IndexMap::new(),
            static_imports: IndexMap::new(),
        })
    }

    /// The unit's package.
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn config(&self) -> &Arc<ImportConfig> {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------------

    /// Decide a reference from the imports already known.
    ///
    /// - base types and unqualified names: simple name
    /// - same package, used: simple name
    /// - same package, unused: undecided (the caller registers it)
    /// - different package: fully qualified
    /// - unknown: undecided
    pub fn check_existing_imports(&self, reference: &Reference) -> Decision {
        if reference.is_always_simple() {
            return Decision::Simple;
        }
        match self.imports.get(reference.simple_name()) {
            Some(record) if record.has_package(reference.qualifier()) => {
                if record.is_used() {
                    Decision::Simple
                } else {
                    Decision::Undecided
                }
            }
            Some(_) => Decision::Qualified,
            None => Decision::Undecided,
        }
    }

    /// The table has no notion of lexical scope; scope layers answer this.
    pub fn check_current_scope(&self, _reference: &Reference) -> Decision {
        Decision::Undecided
    }

    /// Decide a static member reference from the static imports.
    pub fn check_static_import(&self, owner: &Reference, member: &str) -> Decision {
        match self.static_imports.get(member) {
            Some(record) if record.package() == Some(owner.fully_qualified_name()) => {
                Decision::Simple
            }
            Some(_) => Decision::Qualified,
            None => Decision::Undecided,
        }
    }

    /// The record bound to `simple_name`, if any.
    pub fn record(&self, simple_name: &str) -> Option<&ImportRecord> {
        self.imports.get(simple_name)
    }

    /// The static record bound to `member`, if any.
    pub fn static_record(&self, member: &str) -> Option<&ImportRecord> {
        self.static_imports.get(member)
    }

    /// All non-static records in registration order.
    pub fn records(&self) -> impl Iterator<Item = &ImportRecord> {
        self.imports.values()
    }

    /// All static records in registration order.
    pub fn static_records(&self) -> impl Iterator<Item = &ImportRecord> {
        self.static_imports.values()
    }

    /// Number of records of both kinds.
    pub fn len(&self) -> usize {
        self.imports.len() + self.static_imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.static_imports.is_empty()
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Insert or update the record for `reference`, returning its simple name.
    ///
    /// A new record is created with `used = mark_used`; an existing record for
    /// the same package gets `mark_used` OR-ed into its used flag. A record for
    /// a different package is replaced. Base types and unqualified names are
    /// never recorded.
    pub fn register_element(&mut self, reference: &Reference, mark_used: bool) -> SmolStr {
        let simple_name = SmolStr::new(reference.simple_name());
        if reference.is_always_simple() {
            return simple_name;
        }

        if let Some(record) = self.imports.get_mut(&simple_name) {
            if record.has_package(reference.qualifier()) {
                record.mark_used(mark_used);
                tracing::trace!(
                    "[IMPORTS] '{}' already registered (used={})",
                    reference,
                    record.is_used()
                );
                return simple_name;
            }
            tracing::debug!(
                "[IMPORTS] '{}' replaces {} for simple name '{}'",
                reference,
                record.qualified_name(),
                simple_name
            );
        }

        let package = reference.qualifier().map(SmolStr::new);
        let group = self.config.group_for(package.as_deref());
        tracing::trace!(
            "[IMPORTS] register '{}' (used={}, group={})",
            reference,
            mark_used,
            group
        );
        self.imports.insert(
            simple_name.clone(),
            ImportRecord::new(simple_name.clone(), package, false, mark_used, false, group),
        );
        simple_name
    }

    /// Claim a simple name without committing to an import line.
    pub fn reserve_element(&mut self, reference: &Reference) -> SmolStr {
        self.register_element(reference, false)
    }

    /// Bind `simple_name` to `package` unconditionally.
    ///
    /// Used when seeding from a pre-existing file: the record is flagged as
    /// coming from that file so it can be dropped if never used again.
    pub fn add_import(
        &mut self,
        package: impl Into<SmolStr>,
        simple_name: impl Into<SmolStr>,
        used: bool,
    ) {
        let package = package.into();
        let simple_name = simple_name.into();
        let group = self.config.group_for(Some(package.as_str()));
        tracing::trace!(
            "[IMPORTS] add import {}.{} (used={})",
            package,
            simple_name,
            used
        );
        self.imports.insert(
            simple_name.clone(),
            ImportRecord::new(simple_name, Some(package), false, used, true, group),
        );
    }

    /// Bind static `member` to its `owner` type unconditionally.
    pub fn add_static_import(
        &mut self,
        owner: impl Into<SmolStr>,
        member: impl Into<SmolStr>,
        used: bool,
    ) {
        let owner = owner.into();
        let member = member.into();
        let group = self.config.group_for(Some(owner.as_str()));
        tracing::trace!(
            "[IMPORTS] add static import {}.{} (used={})",
            owner,
            member,
            used
        );
        self.static_imports.insert(
            member.clone(),
            ImportRecord::new(member, Some(owner), true, used, true, group),
        );
    }

    /// Mark the static import of `member` as used.
    pub fn mark_static_used(&mut self, member: &str) {
        if let Some(record) = self.static_imports.get_mut(member) {
            record.mark_used(true);
        }
    }

    // ------------------------------------------------------------------------
    // Emission
    // ------------------------------------------------------------------------

    /// Build the final, sorted and grouped import block.
    ///
    /// Unused non-static records are dropped, except those seeded from the
    /// pre-existing file when `include_existing` is set. Records for a default
    /// package, for the unit's own package, or without a package are dropped
    /// since their names are visible anyway. Static and non-static records
    /// share one ordering: group ascending, then package, then simple name,
    /// with a [`ImportLine::Separator`] between adjacent groups.
    pub fn create_import_declarations(&self, include_existing: bool) -> Vec<ImportLine> {
        let mut selected: Vec<&ImportRecord> = self
            .imports
            .values()
            .filter(|record| {
                record.is_used() || (include_existing && record.is_from_existing_file())
            })
            .filter(|record| {
                record
                    .package()
                    .is_some_and(|package| package != self.package.as_str())
            })
            .chain(self.static_imports.values())
            .filter(|record| {
                record
                    .package()
                    .is_some_and(|package| !self.config.is_default_package(package))
            })
            .collect();
        selected.sort_by(|a, b| compare_records(a, b));

        let mut lines = Vec::with_capacity(selected.len() * 2);
        let mut previous_group = None;
        for record in selected {
            if previous_group.is_some_and(|group| group != record.group()) {
                lines.push(ImportLine::Separator);
            }
            previous_group = Some(record.group());
            lines.push(ImportLine::Declaration(ImportDeclaration {
                package: SmolStr::new(record.package().unwrap_or_default()),
                simple_name: SmolStr::new(record.simple_name()),
                is_static: record.is_static(),
            }));
        }

        tracing::trace!(
            "[IMPORTS] emitted {} line(s) from {} record(s)",
            lines.len(),
            self.len()
        );
        lines
    }
}

/// Group, then package (absent last), then simple name, non-static first.
fn compare_records(a: &ImportRecord, b: &ImportRecord) -> Ordering {
    a.group()
        .cmp(&b.group())
        .then_with(|| match (a.package(), b.package()) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.simple_name().cmp(b.simple_name()))
        .then_with(|| a.is_static().cmp(&b.is_static()))
}

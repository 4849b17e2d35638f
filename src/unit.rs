//! Setting up the resolver for one generation unit.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::classpath::Classpath;
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::imports::{ExistingImport, ImportTable};
use crate::reference::Reference;
use crate::resolver::Resolver;
use crate::scope::{ScopeChain, UnitPackageScope};

/// Builder for a seeded [`Resolver`].
///
/// ```ignore
/// let mut resolver = GenerationUnit::new("a.b", classpath)
///     .with_existing_import("import java.util.List;")
///     .with_reserved("a.b.Outer.Entry")
///     .build()?;
/// ```
pub struct GenerationUnit {
    package: SmolStr,
    classpath: Arc<dyn Classpath>,
    config: Arc<ImportConfig>,
    existing_imports: Vec<String>,
    reserved: Vec<String>,
}

impl GenerationUnit {
    /// A unit in `package` (`""` for the default package).
    pub fn new(package: impl Into<SmolStr>, classpath: Arc<dyn Classpath>) -> Self {
        Self {
            package: package.into(),
            classpath,
            config: Arc::new(ImportConfig::default()),
            existing_imports: Vec::new(),
            reserved: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: Arc<ImportConfig>) -> Self {
        self.config = config;
        self
    }

    /// Add one import line already written in the file being regenerated.
    pub fn with_existing_import(mut self, line: impl Into<String>) -> Self {
        self.existing_imports.push(line.into());
        self
    }

    pub fn with_existing_imports<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing_imports.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Claim the simple name of a nested type declared in the unit.
    pub fn with_reserved(mut self, qualified_name: impl Into<String>) -> Self {
        self.reserved.push(qualified_name.into());
        self
    }

    pub fn with_reserved_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validate every seed, then build the resolver.
    ///
    /// Nothing is seeded unless everything parses.
    pub fn build(self) -> Result<Resolver, ImportError> {
        let mut table = ImportTable::new(self.package.clone(), self.config)?;

        let existing = self
            .existing_imports
            .iter()
            .map(|line| ExistingImport::parse(line))
            .collect::<Result<Vec<_>, _>>()?;
        let reserved = self
            .reserved
            .iter()
            .map(|name| Reference::new(name))
            .collect::<Result<Vec<_>, _>>()?;

        for import in &existing {
            seed_import(&mut table, import);
        }
        for reference in &reserved {
            reserve_name(&mut table, reference);
        }
        tracing::debug!(
            "[IMPORTS] unit '{}' seeded with {} import(s), {} reserved name(s)",
            self.package,
            existing.len(),
            reserved.len()
        );

        let chain = ScopeChain::new().wrap(UnitPackageScope::new(self.package, self.classpath));
        Ok(Resolver::with_chain(table, chain))
    }
}

/// Reserve the simple name of `reference` unless a seeded import already
/// binds it to another package; the file's own import keeps the name.
fn reserve_name(table: &mut ImportTable, reference: &Reference) {
    if let Some(seeded) = table
        .record(reference.simple_name())
        .filter(|record| !record.has_package(reference.qualifier()))
    {
        tracing::debug!(
            "[IMPORTS] '{}' not reserved: name taken by existing import '{}'",
            reference,
            seeded.qualified_name()
        );
        return;
    }
    table.reserve_element(reference);
}

fn seed_import(table: &mut ImportTable, import: &ExistingImport) {
    let Some(reference) = import.reference() else {
        tracing::debug!("[IMPORTS] skipping on-demand import '{}.*'", import.name);
        return;
    };
    let Some(qualifier) = reference.qualifier() else {
        tracing::debug!("[IMPORTS] skipping unqualified import '{}'", import.name);
        return;
    };
    if import.is_static {
        table.add_static_import(qualifier, reference.simple_name(), false);
    } else {
        table.add_import(qualifier, reference.simple_name(), false);
    }
}

//! Resolving many independent units at once.
//!
//! Each unit gets its own [`Resolver`](crate::resolver::Resolver); only the
//! classpath and the configuration are shared. Units are spread over the
//! rayon thread pool and results come back in request order.

use std::sync::Arc;

use rayon::prelude::*;
use smol_str::SmolStr;

use crate::classpath::Classpath;
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::unit::GenerationUnit;

/// Everything needed to resolve one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitRequest {
    pub package: SmolStr,
    /// Import lines of the file being regenerated.
    pub existing_imports: Vec<String>,
    /// Nested types declared in the unit.
    pub reserved: Vec<String>,
    /// Raw reference text, in emission order.
    pub references: Vec<String>,
    /// Keep seeded imports even when unused.
    pub include_existing: bool,
}

impl UnitRequest {
    pub fn new(package: impl Into<SmolStr>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    pub fn with_existing_import(mut self, line: impl Into<String>) -> Self {
        self.existing_imports.push(line.into());
        self
    }

    pub fn with_reserved(mut self, qualified_name: impl Into<String>) -> Self {
        self.reserved.push(qualified_name.into());
        self
    }

    pub fn with_reference(mut self, raw: impl Into<String>) -> Self {
        self.references.push(raw.into());
        self
    }

    pub fn including_existing(mut self) -> Self {
        self.include_existing = true;
        self
    }
}

/// The printable results for one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitOutput {
    /// One entry per requested reference, in request order.
    pub resolved: Vec<String>,
    /// The import block, `""` between groups.
    pub imports: Vec<String>,
}

/// Resolve one unit from scratch.
pub fn resolve_unit(
    request: &UnitRequest,
    classpath: Arc<dyn Classpath>,
    config: Arc<ImportConfig>,
) -> Result<UnitOutput, ImportError> {
    let mut resolver = GenerationUnit::new(request.package.clone(), classpath)
        .with_config(config)
        .with_existing_imports(request.existing_imports.iter().map(String::as_str))
        .with_reserved_names(request.reserved.iter().map(String::as_str))
        .build()?;

    let resolved = request
        .references
        .iter()
        .map(|raw| resolver.resolve(raw))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(UnitOutput {
        resolved,
        imports: resolver.import_lines(request.include_existing),
    })
}

/// Resolve every request in parallel, returning results in request order.
///
/// A failing unit does not affect the others.
pub fn resolve_units(
    requests: &[UnitRequest],
    classpath: Arc<dyn Classpath>,
    config: Arc<ImportConfig>,
) -> Vec<Result<UnitOutput, ImportError>> {
    let results: Vec<_> = requests
        .par_iter()
        .map(|request| resolve_unit(request, classpath.clone(), config.clone()))
        .collect();

    tracing::debug!(
        "[IMPORTS] resolved {} unit(s), {} failed",
        results.len(),
        results.iter().filter(|result| result.is_err()).count()
    );
    results
}

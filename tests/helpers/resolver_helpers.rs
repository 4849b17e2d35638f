//! Resolver setup and import-block assertions.

use std::sync::Arc;

use genimports::{ClasspathIndex, GenerationUnit, Resolver};

use crate::helpers::fixtures::sample_classpath;

/// A resolver for a unit in `package` over the sample classpath.
pub fn resolver_in(package: &str) -> Resolver {
    resolver_with(package, sample_classpath())
}

/// A resolver for a unit in `package` over `classpath`.
pub fn resolver_with(package: &str, classpath: ClasspathIndex) -> Resolver {
    GenerationUnit::new(package, Arc::new(classpath))
        .build()
        .expect("test unit should build")
}

/// Resolve each raw reference in order, returning the printed texts.
pub fn resolve_all(resolver: &mut Resolver, references: &[&str]) -> Vec<String> {
    references
        .iter()
        .map(|raw| {
            resolver
                .resolve(raw)
                .unwrap_or_else(|e| panic!("'{}' should resolve: {}", raw, e))
        })
        .collect()
}

/// Assert the emitted import block, blank separators included.
pub fn assert_imports(resolver: &Resolver, expected: &[&str]) {
    let actual = resolver.import_lines(false);
    assert_eq!(
        actual,
        expected.iter().map(|line| line.to_string()).collect::<Vec<_>>(),
        "Unexpected import block:\n{}",
        actual.join("\n")
    );
}

/// Assert that nothing needs importing.
pub fn assert_no_imports(resolver: &Resolver) {
    assert_imports(resolver, &[]);
}

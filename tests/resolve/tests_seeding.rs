//! Regenerating a unit whose file already has imports.

use std::sync::Arc;

use rstest::rstest;

use crate::helpers::fixtures::sample_classpath;
use genimports::{ClasspathIndex, GenerationUnit, ImportError, ReferenceError, Resolver};

fn regenerated(lines: &[&str]) -> Resolver {
    GenerationUnit::new("p", Arc::new(sample_classpath()))
        .with_existing_imports(lines.iter().copied())
        .build()
        .unwrap()
}

const EXISTING: &[&str] = &[
    "import java.util.List;",
    "import java.util.Map;",
    "import static org.junit.Assert.assertTrue;",
];

#[test]
fn test_existing_import_is_reused() {
    let mut resolver = regenerated(EXISTING);

    assert_eq!(resolver.resolve("java.util.List").unwrap(), "List");
    assert_eq!(resolver.resolve("x.Map").unwrap(), "x.Map");

    assert_eq!(
        resolver.import_lines(false),
        vec![
            "import java.util.List;",
            "",
            "import static org.junit.Assert.assertTrue;",
        ]
    );
}

#[test]
fn test_include_existing_keeps_unused_seeds() {
    let mut resolver = regenerated(EXISTING);
    resolver.resolve("java.util.List").unwrap();
    resolver.resolve("e.f.Bar").unwrap();

    assert_eq!(
        resolver.import_lines(true),
        vec![
            "import java.util.List;",
            "import java.util.Map;",
            "",
            "import static org.junit.Assert.assertTrue;",
            "",
            "import e.f.Bar;",
        ]
    );
}

#[test]
fn test_static_import_prints_member_only() {
    let mut resolver = regenerated(EXISTING);
    assert_eq!(
        resolver.resolve_static("org.junit.Assert", "assertTrue").unwrap(),
        "assertTrue"
    );
    assert_eq!(
        resolver.resolve_static("org.hamcrest.Matchers", "assertTrue").unwrap(),
        "Matchers.assertTrue"
    );
    assert_eq!(
        resolver.resolve_static("org.junit.Assert", "fail").unwrap(),
        "Assert.fail"
    );
}

#[test]
fn test_existing_import_survives_reserved_name_collision() {
    let mut resolver = GenerationUnit::new("p", Arc::new(sample_classpath()))
        .with_existing_imports(["import x.Entry;", "import java.util.List;"])
        .with_reserved("p.Outer.Entry")
        .build()
        .unwrap();

    assert_eq!(
        resolver.import_lines(true),
        vec!["import java.util.List;", "", "import x.Entry;"]
    );

    // The seeded Entry still owns the name
    assert_eq!(
        resolver.resolve("java.util.Map.Entry").unwrap(),
        "java.util.Map.Entry"
    );
    assert_eq!(resolver.resolve("x.Entry").unwrap(), "Entry");
    assert_eq!(resolver.import_lines(false), vec!["import x.Entry;"]);
}

#[test]
fn test_wildcard_imports_are_ignored() {
    let mut resolver = regenerated(&["import java.util.*;", "import static java.lang.Math.*;"]);
    assert!(resolver.table().is_empty());
    assert_eq!(resolver.resolve("java.util.List").unwrap(), "List");
}

#[test]
fn test_seed_from_a_default_package_file() {
    let mut resolver = GenerationUnit::new("", Arc::new(ClasspathIndex::new()))
        .with_existing_import("import a.Thing;")
        .build()
        .unwrap();
    assert_eq!(resolver.resolve("a.Thing").unwrap(), "Thing");
    assert_eq!(resolver.import_lines(false), vec!["import a.Thing;"]);
}

#[rstest]
#[case("package a.b;")]
#[case("import ;")]
#[case("importjava.util.List;")]
#[case("import int;")]
fn test_non_import_lines_fail_the_build(#[case] line: &str) {
    let result = GenerationUnit::new("p", Arc::new(ClasspathIndex::new()))
        .with_existing_import(line)
        .build();
    assert!(
        matches!(result, Err(ImportError::NotAnImport(_))),
        "'{}' gave {:?}",
        line,
        result.err()
    );
}

#[test]
fn test_static_import_needs_an_owner() {
    let result = GenerationUnit::new("p", Arc::new(ClasspathIndex::new()))
        .with_existing_import("import static max;")
        .build();
    assert!(matches!(result, Err(ImportError::MissingOwner(_))));
}

#[test]
fn test_malformed_imported_name_fails_the_build() {
    let result = GenerationUnit::new("p", Arc::new(ClasspathIndex::new()))
        .with_existing_import("import java..util.List;")
        .build();
    assert!(matches!(
        result,
        Err(ImportError::Reference(ReferenceError::EmptySegment(_)))
    ));
}

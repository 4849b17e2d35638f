//! Import block ordering and grouping.

use std::sync::Arc;

use rstest::rstest;

use crate::helpers::resolver_helpers::*;
use genimports::{ClasspathIndex, GenerationUnit, ImportConfig, Resolver};

const MIXED: &[&str] = &[
    "com.acme.Thing",
    "org.slf4j.Logger",
    "java.util.List",
    "javax.inject.Named",
    "net.other.Util",
    "java.io.File",
];

fn unit_with_static_import() -> Resolver {
    GenerationUnit::new("z", Arc::new(ClasspathIndex::new()))
        .with_existing_import("import static org.junit.Assert.assertEquals;")
        .build()
        .unwrap()
}

#[test]
fn test_groups_are_separated_by_blank_lines() {
    let mut resolver = unit_with_static_import();
    resolve_all(&mut resolver, MIXED);
    assert_eq!(
        resolver.resolve_static("org.junit.Assert", "assertEquals").unwrap(),
        "assertEquals"
    );

    assert_imports(
        &resolver,
        &[
            "import java.io.File;",
            "import java.util.List;",
            "",
            "import javax.inject.Named;",
            "",
            "import static org.junit.Assert.assertEquals;",
            "import org.slf4j.Logger;",
            "",
            "import com.acme.Thing;",
            "",
            "import net.other.Util;",
        ],
    );
}

#[rstest]
#[case(&[0, 1, 2, 3, 4, 5])]
#[case(&[5, 4, 3, 2, 1, 0])]
#[case(&[2, 0, 5, 1, 4, 3])]
fn test_order_does_not_depend_on_resolution_order(#[case] order: &[usize]) {
    let mut expected = unit_with_static_import();
    resolve_all(&mut expected, MIXED);

    let mut shuffled = unit_with_static_import();
    for &i in order {
        shuffled.resolve(MIXED[i]).unwrap();
    }

    assert_eq!(shuffled.import_lines(false), expected.import_lines(false));
}

#[test]
fn test_custom_groups_and_default_packages() {
    let config = ImportConfig::new()
        .with_group_prefixes(["org.", "java."])
        .with_default_packages(["java.lang", "kotlin"]);
    let mut resolver = GenerationUnit::new("z", Arc::new(ClasspathIndex::new()))
        .with_config(Arc::new(config))
        .build()
        .unwrap();

    resolve_all(
        &mut resolver,
        &["java.util.List", "org.Thing", "kotlin.Unit", "other.Util"],
    );
    assert_imports(
        &resolver,
        &[
            "import org.Thing;",
            "",
            "import java.util.List;",
            "",
            "import other.Util;",
        ],
    );
}

#[test]
fn test_declarations_expose_structure() {
    let mut resolver = resolver_in("p");
    resolve_all(&mut resolver, &["java.util.List", "x.Y"]);

    let lines = resolver.import_declarations(false);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].is_separator());
    let first = lines[0].declaration().unwrap();
    assert_eq!(first.package, "java.util");
    assert_eq!(first.simple_name, "List");
    assert!(!first.is_static);
    assert_eq!(lines[2].to_string(), "import x.Y;");
}

#[test]
fn test_unused_reservation_is_not_emitted() {
    let mut resolver = GenerationUnit::new("p", Arc::new(ClasspathIndex::new()))
        .with_reserved("p.Outer.Entry")
        .build()
        .unwrap();
    assert_no_imports(&resolver);

    // Using it from outside the nested type makes it a real import
    assert_eq!(resolver.resolve("p.Outer.Entry").unwrap(), "Entry");
    assert_imports(&resolver, &["import p.Outer.Entry;"]);
}

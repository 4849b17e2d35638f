//! Properties every unit must keep, whatever the reference mix.

use std::collections::HashMap;

use rstest::rstest;

use crate::helpers::fixtures::QualifyAll;
use crate::helpers::resolver_helpers::*;
use genimports::Reference;

// =============================================================================
// NO COLLISIONS
// =============================================================================

#[rstest]
#[case(&["a.Foo", "b.Foo", "a.Foo", "c.Foo"])]
#[case(&["x.List", "java.util.List", "java.util.List<x.List>"])]
#[case(&["q.Entry", "java.util.Map.Entry", "java.util.Map$Entry"])]
#[case(&["p.X", "q.X", "r.X"])]
#[case(&["a.b.Foo", "c.d.Foo", "a.b.Foo"])]
fn test_same_simple_text_means_same_type(#[case] references: &[&str]) {
    let mut resolver = resolver_in("p");
    let mut bound: HashMap<String, String> = HashMap::new();

    for raw in references {
        let text = resolver.resolve(raw).unwrap();
        if text.contains('.') {
            continue;
        }
        let name = Reference::new(raw.split('<').next().unwrap()).unwrap();
        let previous = bound.insert(text.clone(), name.fully_qualified_name().to_string());
        if let Some(previous) = previous {
            assert_eq!(
                previous,
                name.fully_qualified_name(),
                "'{}' printed for two different types",
                text
            );
        }
    }
}

#[test]
fn test_first_registration_keeps_the_simple_name() {
    let mut resolver = resolver_in("p");
    assert_eq!(
        resolve_all(&mut resolver, &["a.Foo", "b.Foo", "a.Foo"]),
        vec!["Foo", "b.Foo", "Foo"]
    );
    assert_imports(&resolver, &["import a.Foo;"]);
}

// =============================================================================
// STABILITY
// =============================================================================

#[test]
fn test_resolving_twice_prints_the_same_text() {
    let mut resolver = resolver_in("p");
    let first = resolver.resolve("x.y.Widget").unwrap();
    let second = resolver.resolve("x.y.Widget").unwrap();
    assert_eq!(first, second);
    assert_eq!(resolver.table().len(), 1);
}

#[test]
fn test_nested_separator_resolves_like_dot() {
    let mut resolver = resolver_in("p");
    assert_eq!(
        resolve_all(&mut resolver, &["x.Outer$Inner", "x.Outer.Inner"]),
        vec!["Inner", "Inner"]
    );
    assert_imports(&resolver, &["import x.Outer.Inner;"]);
}

// =============================================================================
// BASE TYPES
// =============================================================================

#[rstest]
#[case("int", "int")]
#[case("void", "void")]
#[case("boolean[]", "boolean[]")]
#[case("long...", "long...")]
#[case("double[][]", "double[][]")]
fn test_base_types_print_as_is(#[case] raw: &str, #[case] expected: &str) {
    let mut resolver = resolver_in("p");
    assert_eq!(resolver.resolve(raw).unwrap(), expected);

    // Even a layer that qualifies everything leaves them alone
    let inside = resolver.run_with_scope(|chain| chain.wrap(QualifyAll), |r| r.resolve(raw));
    assert_eq!(inside.unwrap(), expected);

    assert!(resolver.table().is_empty());
    assert_no_imports(&resolver);
}

// =============================================================================
// SCOPE PRECEDENCE
// =============================================================================

#[test]
fn test_unit_package_needs_no_import() {
    let mut resolver = resolver_in("p");
    assert_eq!(resolver.resolve("p.Widget").unwrap(), "Widget");
    assert_no_imports(&resolver);
}

#[test]
fn test_unit_package_never_adds_import_over_reserved_name() {
    let mut resolver = resolver_in("p");
    resolver
        .table_mut()
        .reserve_element(&Reference::new("q.Widget").unwrap());

    assert_eq!(resolver.resolve("p.Widget").unwrap(), "p.Widget");
    assert_eq!(resolver.table().record("Widget").unwrap().package(), Some("q"));
    assert_no_imports(&resolver);
}

#[test]
fn test_default_package_types_need_no_import() {
    let mut resolver = resolver_in("p");
    assert_eq!(
        resolve_all(&mut resolver, &["java.lang.String", "java.lang.Integer"]),
        vec!["String", "Integer"]
    );
    assert_no_imports(&resolver);
}

// =============================================================================
// SHADOWING
// =============================================================================

#[test]
fn test_sibling_in_unit_package_forces_qualification() {
    let mut resolver = resolver_in("p");
    assert_eq!(resolver.resolve("q.X").unwrap(), "q.X");
    assert_eq!(resolver.resolve("p.X").unwrap(), "X");
    assert_no_imports(&resolver);
}

#[test]
fn test_default_package_unit_checks_unqualified_siblings() {
    let mut resolver = resolver_with("", genimports::ClasspathIndex::new().with_plain_type("Foo"));
    assert_eq!(
        resolve_all(&mut resolver, &["Foo", "x.Foo", "x.Bar"]),
        vec!["Foo", "x.Foo", "Bar"]
    );
    assert_imports(&resolver, &["import x.Bar;"]);
}

// =============================================================================
// MALFORMED INPUT
// =============================================================================

#[rstest]
#[case("")]
#[case("a..B")]
#[case("a.B<c.D")]
#[case("a.B>")]
#[case("a.B<c.D>>")]
#[case("a.1B")]
#[case("a.B c.D")]
fn test_malformed_reference_is_rejected(#[case] raw: &str) {
    let mut resolver = resolver_in("p");
    assert!(resolver.resolve(raw).is_err(), "'{}' should be rejected", raw);
    assert!(resolver.table().is_empty());
}

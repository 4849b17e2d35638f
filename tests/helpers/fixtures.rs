//! Classpath fixtures and small scope layers used across tests.

use genimports::{ClasspathIndex, Decision, Reference, ScopeLayer, TypeMembers};

/// A classpath with a few packages and a small type hierarchy:
///
/// ```text
/// a.b.Foo
/// p.X
/// lib.Base  extends lib.Root, java.lang.Object   nested: Entry
/// lib.Root                                       nested: Key
/// ```
pub fn sample_classpath() -> ClasspathIndex {
    ClasspathIndex::new()
        .with_plain_type("a.b.Foo")
        .with_plain_type("p.X")
        .with_type(
            "lib.Base",
            TypeMembers::new()
                .with_supertype("lib.Root")
                .with_supertype("java.lang.Object")
                .with_nested("Entry"),
        )
        .with_type("lib.Root", TypeMembers::new().with_nested("Key"))
}

/// Makes every type of one qualifier visible without import.
#[derive(Debug)]
pub struct FreePass {
    pub qualifier: &'static str,
}

impl ScopeLayer for FreePass {
    fn qualifier(&self) -> &str {
        self.qualifier
    }

    fn check(&self, reference: &Reference) -> Decision {
        if reference.qualifier() == Some(self.qualifier) {
            Decision::Simple
        } else {
            Decision::Undecided
        }
    }
}

/// Qualifies everything it is asked about.
#[derive(Debug)]
pub struct QualifyAll;

impl ScopeLayer for QualifyAll {
    fn qualifier(&self) -> &str {
        ""
    }

    fn check(&self, _reference: &Reference) -> Decision {
        Decision::Qualified
    }
}

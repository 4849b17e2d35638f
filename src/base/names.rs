//! Helpers for identifiers and dotted qualified names.

use super::constants::{NESTED_SEPARATOR, PACKAGE_SEPARATOR};

/// Check if a character may start an identifier.
///
/// Uses Unicode Standard Annex #31 rules, plus `_` and `$` which the target
/// language accepts anywhere in an identifier.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    unicode_ident::is_xid_start(c) || c == '_' || c == '$'
}

/// Check if a character may continue an identifier.
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || c == '$'
}

/// Check if `segment` is a single, non-empty identifier.
pub fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_continue),
        _ => false,
    }
}

/// Rewrite nested-type separators into the package separator.
///
/// `a.b.Outer$Inner` becomes `a.b.Outer.Inner`. A leading or trailing `$` is
/// part of an identifier (generated names use it), so only interior separators
/// between two identifier characters are rewritten.
pub fn normalize_separators(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    for (i, &c) in chars.iter().enumerate() {
        let interior = i > 0
            && i + 1 < chars.len()
            && chars[i - 1] != PACKAGE_SEPARATOR
            && chars[i - 1] != NESTED_SEPARATOR
            && is_identifier_start(chars[i + 1])
            && chars[i + 1] != NESTED_SEPARATOR;
        if c == NESTED_SEPARATOR && interior {
            out.push(PACKAGE_SEPARATOR);
        } else {
            out.push(c);
        }
    }
    out
}

/// Split a normalized dotted name into `(qualifier, simple_name)`.
///
/// Returns `None` for the qualifier when the name has no separator.
pub fn split_qualified(name: &str) -> (Option<&str>, &str) {
    match name.rfind(PACKAGE_SEPARATOR) {
        Some(idx) => (Some(&name[..idx]), &name[idx + 1..]),
        None => (None, name),
    }
}

/// Join a qualifier and a simple name with the package separator.
pub fn join_qualified(qualifier: &str, simple_name: &str) -> String {
    if qualifier.is_empty() {
        return simple_name.to_string();
    }
    let mut out = String::with_capacity(qualifier.len() + simple_name.len() + 1);
    out.push_str(qualifier);
    out.push(PACKAGE_SEPARATOR);
    out.push_str(simple_name);
    out
}

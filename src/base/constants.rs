//! Language constants shared by every layer.

/// Separator between package segments and between a type and its members.
pub const PACKAGE_SEPARATOR: char = '.';

/// Separator used by binary names for nested types (`a.b.Outer$Inner`).
pub const NESTED_SEPARATOR: char = '$';

/// Primitive and void-like names. These are never imported.
pub const BASE_TYPES: &[&str] = &[
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

/// Packages whose types are visible everywhere without an import.
pub const DEFAULT_PACKAGES: &[&str] = &["java.lang"];

/// The universal root type; ancestor walks stop here.
pub const ROOT_TYPE: &str = "java.lang.Object";

/// Package prefixes defining import groups, in output order.
pub const DEFAULT_GROUP_PREFIXES: &[&str] = &["java.", "javax.", "org.", "com."];

pub const IMPORT_KEYWORD: &str = "import";
pub const STATIC_KEYWORD: &str = "static";
pub const STATEMENT_TERMINATOR: char = ';';
pub const LINE_COMMENT: &str = "//";

/// Returns true if `name` is a primitive or void-like base type.
#[inline]
pub fn is_base_type(name: &str) -> bool {
    BASE_TYPES.contains(&name)
}

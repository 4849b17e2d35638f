//! References: what the template layer asks the engine to print.
//!
//! - [`Reference`] - one fully-qualified name occurrence, split into
//!   qualifier and simple name
//! - [`TypeExpr`] - raw reference text tokenized into names, type arguments,
//!   wildcards and array suffixes

mod descriptor;
mod parse;

pub use descriptor::Reference;
pub use parse::{BoundKind, NamedType, TypeExpr, WildcardBound};

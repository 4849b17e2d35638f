//! Import table: the per-unit symbol table of chosen imports.
//!
//! ## Key Types
//!
//! - [`ImportTable`] - simple name → chosen import, plus static member imports
//! - [`ImportRecord`] - one chosen import with its used/pre-existing flags
//! - [`Decision`] - what a lookup says about printing a reference
//! - [`ImportLine`] - emitted import declarations and group separators
//! - [`ExistingImport`] - an import line read from the file being regenerated

mod decision;
mod declaration;
mod record;
mod table;

pub use decision::Decision;
pub use declaration::{ExistingImport, ImportDeclaration, ImportLine, render_lines};
pub use record::ImportRecord;
pub use table::ImportTable;

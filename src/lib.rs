//! # genimports
//!
//! Reference resolution and import-declaration engine for source code
//! generators that emit class-based languages with explicit imports.
//!
//! For every fully-qualified name a generator prints, the engine decides
//! whether the simple name or the qualified name goes into the text, and at the
//! end it produces the sorted, grouped import block for the unit.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! batch      → Parallel resolution of many units (rayon)
//!   ↓
//! unit       → GenerationUnit builder: seeding from an existing file
//!   ↓
//! resolver   → Resolver façade, run_with_scope
//!   ↓
//! scope      → ScopeLayer trait, ScopeChain, package/enclosing-type layers
//!   ↓
//! imports    → ImportTable, ImportRecord, declarations
//!   ↓
//! classpath  → Classpath trait, in-memory index, memoizing wrapper
//!   ↓
//! reference  → Reference descriptor, TypeExpr tokenizer
//!   ↓
//! config     → ImportConfig
//!   ↓
//! base       → Constants and name helpers
//! ```

// ============================================================================
// MODULES (dependency order: base → reference → imports → scope → resolver)
// ============================================================================

/// Foundation: constants, identifier and qualified-name helpers
pub mod base;

/// Error types
pub mod error;

/// Engine configuration
pub mod config;

/// Reference descriptors and the raw-text tokenizer
pub mod reference;

/// Classpath lookups used by the scope layers
pub mod classpath;

/// The per-unit import table
pub mod imports;

/// Scope layers and chains
pub mod scope;

/// The resolver façade
pub mod resolver;

/// Unit setup and seeding
pub mod unit;

/// Many units in parallel
pub mod batch;

// Re-export the types most callers need
pub use batch::{UnitOutput, UnitRequest, resolve_units};
pub use classpath::{CachedClasspath, Classpath, ClasspathIndex, TypeMembers};
pub use config::ImportConfig;
pub use error::{ImportError, ReferenceError};
pub use imports::{Decision, ImportLine, ImportTable};
pub use reference::{Reference, TypeExpr};
pub use resolver::Resolver;
pub use scope::{EnclosingTypeScope, ScopeChain, ScopeLayer, TypeModel, UnitPackageScope};
pub use unit::GenerationUnit;

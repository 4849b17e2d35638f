//! Resolver tests
//!
//! End-to-end behavior of one generation unit:
//! - Collision avoidance and stable output
//! - Package, enclosing-type and custom scope layers
//! - Seeding from a pre-existing file
//! - Import block grouping and ordering
//! - Batch resolution

pub mod tests_emission;
pub mod tests_properties;
pub mod tests_seeding;

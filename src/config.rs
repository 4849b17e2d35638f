//! Engine configuration.
//!
//! The defaults describe a Java-like target: `java.lang` is always visible,
//! `java.lang.Object` is the universal root, and imports are grouped as
//! `java.*`, `javax.*`, `org.*`, `com.*`, then everything else.

use smol_str::SmolStr;

use crate::base::constants::{DEFAULT_GROUP_PREFIXES, DEFAULT_PACKAGES, ROOT_TYPE};

/// Configuration shared by the import table and the scope layers of a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImportConfig {
    /// Packages visible everywhere; their types are never imported.
    pub default_packages: Vec<SmolStr>,
    /// The universal root type, excluded from ancestor walks.
    pub root_type: SmolStr,
    /// Ordered package prefixes; a package's group is the index of the first
    /// matching prefix, unmatched packages sort after every prefix group.
    pub group_prefixes: Vec<SmolStr>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_packages: DEFAULT_PACKAGES.iter().map(|p| SmolStr::new(p)).collect(),
            root_type: SmolStr::new(ROOT_TYPE),
            group_prefixes: DEFAULT_GROUP_PREFIXES
                .iter()
                .map(|p| SmolStr::new(p))
                .collect(),
        }
    }
}

impl ImportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the always-visible packages.
    pub fn with_default_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.default_packages = packages.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the universal root type.
    pub fn with_root_type(mut self, root: impl Into<SmolStr>) -> Self {
        self.root_type = root.into();
        self
    }

    /// Replace the group prefixes.
    pub fn with_group_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.group_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Check if `package` is always visible.
    pub fn is_default_package(&self, package: &str) -> bool {
        self.default_packages.iter().any(|p| p.as_str() == package)
    }

    /// Check if `qualified_name` is the universal root type.
    pub fn is_root_type(&self, qualified_name: &str) -> bool {
        self.root_type.as_str() == qualified_name
    }

    /// Classify a package into its output group.
    ///
    /// A prefix matches the package itself (`java` for prefix `java.`) as well
    /// as every package below it.
    pub fn group_for(&self, package: Option<&str>) -> u32 {
        let Some(package) = package else {
            return self.group_prefixes.len() as u32;
        };
        self.group_prefixes
            .iter()
            .position(|prefix| {
                package.starts_with(prefix.as_str())
                    || prefix.strip_suffix('.') == Some(package)
            })
            .unwrap_or(self.group_prefixes.len()) as u32
    }

    /// Read a configuration from JSON. Missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(text: &str) -> Result<Self, crate::error::ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}

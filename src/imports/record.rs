use smol_str::SmolStr;

use crate::base::join_qualified;

/// The single import choice the table holds for one simple name.
///
/// For static imports `package` is the owner type and `simple_name` the
/// imported member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportRecord {
    simple_name: SmolStr,
    package: Option<SmolStr>,
    is_static: bool,
    used: bool,
    from_existing_file: bool,
    /// Output group, derived once from the package prefix.
    group: u32,
}

impl ImportRecord {
    pub(super) fn new(
        simple_name: SmolStr,
        package: Option<SmolStr>,
        is_static: bool,
        used: bool,
        from_existing_file: bool,
        group: u32,
    ) -> Self {
        Self {
            simple_name,
            package,
            is_static,
            used,
            from_existing_file,
            group,
        }
    }

    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn is_from_existing_file(&self) -> bool {
        self.from_existing_file
    }

    pub fn group(&self) -> u32 {
        self.group
    }

    /// Package and simple name joined.
    pub fn qualified_name(&self) -> String {
        join_qualified(self.package().unwrap_or(""), &self.simple_name)
    }

    /// Check if this record binds its name to `package`.
    pub fn has_package(&self, package: Option<&str>) -> bool {
        self.package.as_deref() == package
    }

    /// OR the used flag with `used`.
    pub(super) fn mark_used(&mut self, used: bool) {
        self.used |= used;
    }
}

//! Import lines: the emitted output and the pre-existing input.

use std::fmt;

use smol_str::SmolStr;

use crate::base::constants::{IMPORT_KEYWORD, LINE_COMMENT, STATEMENT_TERMINATOR, STATIC_KEYWORD};
use crate::base::join_qualified;
use crate::error::ImportError;
use crate::reference::Reference;

/// One emitted import declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImportDeclaration {
    /// Package (or owner type, for static imports).
    pub package: SmolStr,
    /// Imported type (or member, for static imports).
    pub simple_name: SmolStr,
    pub is_static: bool,
}

impl ImportDeclaration {
    /// The imported name, fully qualified.
    pub fn qualified_name(&self) -> String {
        join_qualified(&self.package, &self.simple_name)
    }
}

impl fmt::Display for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(IMPORT_KEYWORD)?;
        if self.is_static {
            write!(f, " {}", STATIC_KEYWORD)?;
        }
        write!(
            f,
            " {}{}",
            self.qualified_name(),
            STATEMENT_TERMINATOR
        )
    }
}

/// A printable line of the import block.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImportLine {
    Declaration(ImportDeclaration),
    /// Blank line between two import groups.
    Separator,
}

impl ImportLine {
    pub fn declaration(&self) -> Option<&ImportDeclaration> {
        match self {
            ImportLine::Declaration(decl) => Some(decl),
            ImportLine::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, ImportLine::Separator)
    }
}

impl fmt::Display for ImportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportLine::Declaration(decl) => decl.fmt(f),
            ImportLine::Separator => Ok(()),
        }
    }
}

/// Render an import block into printable lines.
pub fn render_lines(lines: &[ImportLine]) -> Vec<String> {
    lines.iter().map(ToString::to_string).collect()
}

/// An import already written in the file being regenerated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExistingImport {
    /// The imported name, normalized (`a.b.C`, or `a.b.C.member` when static).
    pub name: SmolStr,
    pub is_static: bool,
    /// `import a.b.*;` style on-demand import.
    pub is_wildcard: bool,
}

impl ExistingImport {
    /// A single-type import.
    pub fn single(name: &str) -> Result<Self, ImportError> {
        Self::from_parts(name, false)
    }

    /// A single static member import (`owner.member`).
    pub fn member(name: &str) -> Result<Self, ImportError> {
        Self::from_parts(name, true)
    }

    /// Parse one written import line, such as `import static a.B.max;`.
    ///
    /// A trailing `//` comment is ignored.
    pub fn parse(line: &str) -> Result<Self, ImportError> {
        let code = line.find(LINE_COMMENT).map_or(line, |end| &line[..end]);
        let rest = code
            .trim()
            .strip_prefix(IMPORT_KEYWORD)
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .ok_or_else(|| ImportError::not_an_import(line))?
            .trim_start();

        let (is_static, rest) = match rest.strip_prefix(STATIC_KEYWORD) {
            Some(after) if after.starts_with(char::is_whitespace) => (true, after.trim_start()),
            _ => (false, rest),
        };

        let name = rest
            .trim_end()
            .strip_suffix(STATEMENT_TERMINATOR)
            .unwrap_or(rest)
            .trim();
        if name.is_empty() {
            return Err(ImportError::not_an_import(line));
        }

        Self::from_parts(name, is_static)
    }

    fn from_parts(name: &str, is_static: bool) -> Result<Self, ImportError> {
        if let Some(package) = name.strip_suffix(".*") {
            let package = Reference::new(package)?;
            return Ok(Self {
                name: SmolStr::new(package.fully_qualified_name()),
                is_static,
                is_wildcard: true,
            });
        }

        let reference = Reference::new(name)?;
        if reference.is_base_type() || (is_static && reference.qualifier().is_none()) {
            return Err(if is_static {
                ImportError::MissingOwner(name.to_string())
            } else {
                ImportError::not_an_import(name)
            });
        }
        Ok(Self {
            name: SmolStr::new(reference.fully_qualified_name()),
            is_static,
            is_wildcard: false,
        })
    }

    /// The descriptor for the imported name. `None` for wildcards.
    pub fn reference(&self) -> Option<Reference> {
        if self.is_wildcard {
            return None;
        }
        Reference::new(&self.name).ok()
    }
}

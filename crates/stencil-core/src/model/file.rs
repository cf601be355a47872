//! Source files and imports.

use indexmap::IndexSet;

use super::{Declaration, Type};

/// An import of a type, or of a static member of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    ty: Type,
    static_member: Option<String>,
}

impl Import {
    pub fn of(ty: Type) -> Self {
        Self {
            ty,
            static_member: None,
        }
    }

    /// Creates a static import of `member` from `ty`.
    pub fn of_static(ty: Type, member: impl Into<String>) -> Self {
        Self {
            ty,
            static_member: Some(member.into()),
        }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn static_member(&self) -> Option<&str> {
        self.static_member.as_deref()
    }

    pub fn is_static(&self) -> bool {
        self.static_member.is_some()
    }
}

/// A source file: imports followed by top-level declarations.
///
/// The name is a relative path such as `com/acme/User.java`; its
/// directories determine the package. Imports form an ordered set, so
/// adding the same import twice keeps the first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    imports: IndexSet<Import>,
    declarations: Vec<Declaration>,
}

impl File {
    pub fn of(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: IndexSet::new(),
            declarations: Vec::new(),
        }
    }

    pub fn with_import(mut self, import: Import) -> Self {
        self.imports.insert(import);
        self
    }

    pub fn with_declaration(mut self, declaration: impl Into<Declaration>) -> Self {
        self.declarations.push(declaration.into());
        self
    }

    /// Adds an import in place; returns `false` if it was already present.
    pub fn add_import(&mut self, import: Import) -> bool {
        self.imports.insert(import)
    }

    pub fn add_declaration(&mut self, declaration: impl Into<Declaration>) {
        self.declarations.push(declaration.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn imports(&self) -> &IndexSet<Import> {
        &self.imports
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// The package implied by the file name's directories, dot separated.
    ///
    /// Returns `None` for a file in the root directory.
    pub fn package(&self) -> Option<String> {
        let normalized = self.name.replace('\\', "/");
        let (dir, _) = normalized.rsplit_once('/')?;
        let package = dir
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(".");
        (!package.is_empty()).then_some(package)
    }
}

//! Dispatching renders through a registry.
//!
//! A [`Generator`] binds a frozen [`Registry`] to the formatting settings
//! and the import scope of the file being rendered. Renderers call back
//! into it to render their children, so one generator carries a whole
//! render call from the root node down to the leaves.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use log::trace;

use stencil_core::{
    Fragment, RenderError,
    combine::Joiner,
    format::Formatting,
    model::{File, NodeKind, NodeRef, Type},
};

use crate::registry::Registry;

/// Types in this package are visible without an import.
pub(crate) const IMPLICIT_PACKAGE: &str = "java.lang";

/// Renders nodes with the renderers of one registry.
///
/// Generators are cheap to clone and can be shared between threads.
/// Changing the formatting or the import scope returns a new generator;
/// the registry itself is never modified.
#[derive(Debug, Clone)]
pub struct Generator {
    registry: Arc<Registry>,
    formatting: Arc<Formatting>,
    scope: Arc<ImportScope>,
}

impl Generator {
    /// Create a generator with default formatting and an empty scope.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            formatting: Arc::new(Formatting::default()),
            scope: Arc::new(ImportScope::default()),
        }
    }

    pub fn with_formatting(mut self, formatting: Formatting) -> Self {
        self.formatting = Arc::new(formatting);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn formatting(&self) -> &Formatting {
        &self.formatting
    }

    pub fn scope(&self) -> &ImportScope {
        &self.scope
    }

    /// A generator sharing this one's registry and formatting but
    /// resolving type names against `scope`.
    pub fn scoped(&self, scope: ImportScope) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            formatting: Arc::clone(&self.formatting),
            scope: Arc::new(scope),
        }
    }

    /// Render one node.
    ///
    /// The renderer's result is returned unchanged, including an absent
    /// fragment.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NoRendererFound`] if the registry has no
    /// renderer for the node, or whatever error the renderer returns.
    pub fn on<'n>(&self, node: impl Into<NodeRef<'n>>) -> Result<Fragment, RenderError> {
        let node = node.into();
        trace!(kind:% = node.kind(); "Rendering node");
        self.registry.lookup(node)?.render(self, node)
    }

    /// Render each node in order.
    ///
    /// Nothing is rendered until the iterator is pulled, so a consumer
    /// stopping at the first error leaves the remaining nodes untouched.
    pub fn on_each<'n, I>(
        &self,
        nodes: I,
    ) -> impl Iterator<Item = Result<Fragment, RenderError>>
    where
        I: IntoIterator,
        I::Item: Into<NodeRef<'n>>,
    {
        nodes.into_iter().map(move |node| self.on(node))
    }

    /// Render each node and join the results with `separator`.
    ///
    /// # Errors
    ///
    /// Returns the first error any node produces.
    pub fn join_each<'n, I>(&self, nodes: I, separator: &str) -> Result<Fragment, RenderError>
    where
        I: IntoIterator,
        I::Item: Into<NodeRef<'n>>,
    {
        self.join_each_with(nodes, Joiner::new(separator))
    }

    /// Render each node and join the results with `joiner`.
    ///
    /// # Errors
    ///
    /// Returns the first error any node produces.
    pub fn join_each_with<'n, I>(&self, nodes: I, joiner: Joiner<'_>) -> Result<Fragment, RenderError>
    where
        I: IntoIterator,
        I::Item: Into<NodeRef<'n>>,
    {
        joiner.try_join(self.on_each(nodes))
    }

    /// Render an optional child; a missing child is absent output.
    ///
    /// # Errors
    ///
    /// Returns any error from rendering the child.
    pub fn on_optional<'n, N>(&self, node: Option<N>) -> Result<Fragment, RenderError>
    where
        N: Into<NodeRef<'n>>,
    {
        match node {
            Some(node) => self.on(node),
            None => Ok(Fragment::Absent),
        }
    }

    /// Render a child that the model requires.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MalformedModel`] naming `owner` and `role`
    /// when the child is missing, or any error from rendering it.
    pub fn on_required<'n, N>(
        &self,
        node: Option<N>,
        owner: NodeKind,
        role: &str,
    ) -> Result<Fragment, RenderError>
    where
        N: Into<NodeRef<'n>>,
    {
        let node = node.ok_or_else(|| RenderError::malformed(owner, format!("{role} is missing")))?;
        self.on(node)
    }
}

/// The type names visible without qualification in one file.
///
/// # Example
///
/// ```
/// # use stencil::ImportScope;
/// # use stencil_core::model::Type;
/// let scope = ImportScope::new(Some("com.acme".to_string()))
///     .with_import(&Type::of("java.util.List"));
///
/// assert_eq!(scope.short_name(&Type::of("java.util.List")), "List");
/// assert_eq!(scope.short_name(&Type::of("java.lang.String")), "String");
/// assert_eq!(scope.short_name(&Type::of("com.acme.User")), "User");
/// assert_eq!(scope.short_name(&Type::of("java.util.Map")), "java.util.Map");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportScope {
    package: Option<String>,
    /// Simple name to qualified name; the first import of a simple name
    /// owns it.
    imported: IndexMap<String, String>,
    wildcards: IndexSet<String>,
}

impl ImportScope {
    /// An empty scope for a file in `package`.
    pub fn new(package: Option<String>) -> Self {
        Self {
            package,
            ..Self::default()
        }
    }

    /// Add an import; `a.b.*` imports every type of package `a.b`.
    pub fn with_import(mut self, ty: &Type) -> Self {
        self.add_import(ty);
        self
    }

    fn add_import(&mut self, ty: &Type) {
        let name = ty.name();
        if let Some(package) = name.strip_suffix(".*") {
            self.wildcards.insert(package.to_string());
            return;
        }
        self.imported
            .entry(ty.simple_name().to_string())
            .or_insert_with(|| name.to_string());
    }

    /// The scope of `file`: its package and its non-static imports.
    pub fn for_file(file: &File) -> Self {
        let mut scope = Self::new(file.package());
        for import in file.imports().iter().filter(|import| !import.is_static()) {
            scope.add_import(import.ty());
        }
        scope
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Returns `true` if `ty` was imported explicitly or by wildcard.
    pub fn is_imported(&self, ty: &Type) -> bool {
        let explicit = self
            .imported
            .get(ty.simple_name())
            .is_some_and(|qualified| qualified == ty.name());
        explicit || ty.package().is_some_and(|package| self.wildcards.contains(package))
    }

    fn is_shadowed(&self, ty: &Type) -> bool {
        self.imported
            .get(ty.simple_name())
            .is_some_and(|qualified| qualified != ty.name())
    }

    /// The name to print for `ty` in this scope.
    ///
    /// Types without a package, types in `java.lang` or in the file's own
    /// package, and imported types print their simple name. Everything else
    /// stays fully qualified, as does any type whose simple name an import
    /// gives to a different type.
    pub fn short_name<'t>(&self, ty: &'t Type) -> &'t str {
        let visible = match ty.package() {
            None => true,
            Some(_) if self.is_shadowed(ty) => false,
            Some(package) => {
                package == IMPLICIT_PACKAGE
                    || self.package.as_deref() == Some(package)
                    || self.is_imported(ty)
            }
        };
        if visible { ty.simple_name() } else { ty.name() }
    }
}

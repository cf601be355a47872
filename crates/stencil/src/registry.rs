//! Renderer registry keyed by node kind.
//!
//! A [`Registry`] maps each [`NodeKind`] to the [`Renderer`] responsible for
//! it. One registry exists per output dialect. It is filled during engine
//! start-up and then frozen behind an [`Arc`], after which it is only read.
//!
//! # Lookup
//!
//! [`Registry::lookup`] tries the node's exact kind first and then each of
//! the capabilities the node declares, in order. A node whose kind and
//! capabilities are all unregistered is an error, never silently skipped.
//!
//! # Example
//!
//! ```
//! # use stencil::{Generator, registry::Registry};
//! # use stencil_core::{Fragment, model::{NodeKind, Statement}};
//! # use std::sync::Arc;
//! let mut registry = Registry::new("plain");
//! registry.register_fn(NodeKind::STATEMENT, |_, _| Ok(Fragment::present("...")));
//!
//! // Both statement shapes resolve through the shared capability.
//! let generator = Generator::new(Arc::new(registry));
//! let composite = Statement::composite([]);
//! assert_eq!(generator.on(&composite).unwrap(), Fragment::present("..."));
//! ```

use std::{any, fmt, marker::PhantomData, sync::Arc};

use indexmap::IndexMap;
use log::trace;

use stencil_core::{
    Fragment, RenderError,
    model::{FromNode, NodeKind, NodeRef},
};

use crate::generator::Generator;

/// Renders a type-erased node.
///
/// Renderers receive the [`Generator`] that dispatched to them so they can
/// render child nodes through the same registry, formatting and import
/// scope.
pub trait Renderer: Send + Sync {
    /// Render `node`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the node or one of its children cannot
    /// be rendered. Errors from child renders must be propagated unchanged.
    fn render(&self, generator: &Generator, node: NodeRef<'_>) -> Result<Fragment, RenderError>;
}

/// Renders one concrete model type.
///
/// Install a view with [`Registry::install_view`]; the registry adapts it
/// into a [`Renderer`] that extracts the model from the dispatched node
/// and fails with [`RenderError::UnexpectedNode`] for any other node.
pub trait View<M>: Send + Sync {
    /// Render `model`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the model or one of its children cannot
    /// be rendered.
    fn render(&self, generator: &Generator, model: &M) -> Result<Fragment, RenderError>;
}

/// Adapts a [`View`] into a [`Renderer`].
struct TypedView<M, V> {
    view: V,
    model: PhantomData<fn(&M)>,
}

impl<M, V> Renderer for TypedView<M, V>
where
    M: FromNode,
    V: View<M>,
{
    fn render(&self, generator: &Generator, node: NodeRef<'_>) -> Result<Fragment, RenderError> {
        let model = M::from_node(node).ok_or_else(|| RenderError::UnexpectedNode {
            expected: short_type_name::<M>(),
            found: node.kind(),
        })?;
        self.view.render(generator, model)
    }
}

/// Adapts a closure into a [`Renderer`].
struct FnRenderer<F>(F);

impl<F> Renderer for FnRenderer<F>
where
    F: Fn(&Generator, NodeRef<'_>) -> Result<Fragment, RenderError> + Send + Sync,
{
    fn render(&self, generator: &Generator, node: NodeRef<'_>) -> Result<Fragment, RenderError> {
        (self.0)(generator, node)
    }
}

/// The last path segment of a type's name (`Statement`).
fn short_type_name<T>() -> &'static str {
    let name = any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

/// A mapping from node kinds to renderers for one dialect.
#[derive(Clone)]
pub struct Registry {
    dialect: String,
    renderers: IndexMap<NodeKind, Arc<dyn Renderer>>,
}

impl Registry {
    /// Create an empty registry for `dialect`.
    pub fn new(dialect: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
            renderers: IndexMap::new(),
        }
    }

    /// The dialect this registry renders.
    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    /// Install `renderer` for `kind`, replacing and returning any renderer
    /// previously installed for it.
    pub fn register(
        &mut self,
        kind: NodeKind,
        renderer: impl Renderer + 'static,
    ) -> Option<Arc<dyn Renderer>> {
        self.register_shared(kind, Arc::new(renderer))
    }

    /// Install an already shared renderer for `kind`.
    pub fn register_shared(
        &mut self,
        kind: NodeKind,
        renderer: Arc<dyn Renderer>,
    ) -> Option<Arc<dyn Renderer>> {
        let previous = self.renderers.insert(kind, renderer);
        trace!(dialect = self.dialect, kind:%, replaced = previous.is_some(); "Registered renderer");
        previous
    }

    /// Install a closure as the renderer for `kind`.
    pub fn register_fn<F>(&mut self, kind: NodeKind, render: F) -> Option<Arc<dyn Renderer>>
    where
        F: Fn(&Generator, NodeRef<'_>) -> Result<Fragment, RenderError> + Send + Sync + 'static,
    {
        self.register(kind, FnRenderer(render))
    }

    /// Install a typed view for model type `M` under `kind`.
    pub fn install_view<M, V>(&mut self, kind: NodeKind, view: V) -> Option<Arc<dyn Renderer>>
    where
        M: FromNode + 'static,
        V: View<M> + 'static,
    {
        self.register(
            kind,
            TypedView {
                view,
                model: PhantomData,
            },
        )
    }

    /// Install every renderer of `other`, replacing renderers registered
    /// here for the same kinds.
    pub fn extend_from(&mut self, other: &Registry) {
        for (kind, renderer) in &other.renderers {
            self.register_shared(*kind, Arc::clone(renderer));
        }
    }

    /// Find the renderer for `node`.
    ///
    /// The exact kind wins over capabilities; capabilities are tried in the
    /// order the node declares them.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NoRendererFound`] if neither the kind nor any
    /// capability has a renderer.
    pub fn lookup(&self, node: NodeRef<'_>) -> Result<&dyn Renderer, RenderError> {
        let kind = node.kind();
        if let Some(renderer) = self.renderers.get(&kind) {
            return Ok(renderer.as_ref());
        }

        for capability in node.capabilities() {
            if let Some(renderer) = self.renderers.get(capability) {
                trace!(kind:%, capability:%; "Resolved renderer through capability");
                return Ok(renderer.as_ref());
            }
        }

        Err(RenderError::NoRendererFound {
            kind,
            capabilities: node.capabilities().to_vec(),
        })
    }

    /// Returns `true` if a renderer is registered for exactly `kind`.
    pub fn contains(&self, kind: NodeKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = NodeKind> {
        self.renderers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("dialect", &self.dialect)
            .field("kinds", &self.renderers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_core::model::{Statement, Type};

    struct Constant(&'static str);

    impl Renderer for Constant {
        fn render(&self, _: &Generator, _: NodeRef<'_>) -> Result<Fragment, RenderError> {
            Ok(Fragment::present(self.0))
        }
    }

    fn render_with(registry: Registry, node: NodeRef<'_>) -> Result<Fragment, RenderError> {
        Generator::new(Arc::new(registry)).on(node)
    }

    struct TypeNameView;

    impl View<Type> for TypeNameView {
        fn render(&self, _: &Generator, ty: &Type) -> Result<Fragment, RenderError> {
            Ok(Fragment::present(ty.name()))
        }
    }

    #[test]
    fn test_register_returns_previous() {
        let mut registry = Registry::new("test");
        assert!(registry.register(NodeKind::TYPE, Constant("a")).is_none());
        assert!(registry.register(NodeKind::TYPE, Constant("b")).is_some());
        assert_eq!(registry.len(), 1);

        let ty = Type::of("int");
        assert_eq!(render_with(registry, NodeRef::from(&ty)), Ok(Fragment::present("b")));
    }

    #[test]
    fn test_exact_kind_beats_capability() {
        let mut registry = Registry::new("test");
        registry.register(NodeKind::STATEMENT, Constant("capability"));
        registry.register(NodeKind::SIMPLE_STATEMENT, Constant("exact"));

        let simple = Statement::of("x();");
        let composite = Statement::composite([]);
        let generator = Generator::new(Arc::new(registry));

        assert_eq!(generator.on(&simple), Ok(Fragment::present("exact")));
        assert_eq!(generator.on(&composite), Ok(Fragment::present("capability")));
    }

    #[test]
    fn test_unregistered_kind_fails() {
        let registry = Registry::new("test");
        let composite = Statement::composite([]);

        let err = render_with(registry, NodeRef::from(&composite)).unwrap_err();
        assert_eq!(
            err,
            RenderError::NoRendererFound {
                kind: NodeKind::COMPOSITE_STATEMENT,
                capabilities: vec![NodeKind::STATEMENT],
            }
        );
    }

    #[test]
    fn test_typed_view_rejects_other_nodes() {
        let mut registry = Registry::new("test");
        registry.install_view::<Type, _>(NodeKind::STATEMENT, TypeNameView);

        let statement = Statement::of("x();");
        let err = render_with(registry, NodeRef::from(&statement)).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnexpectedNode {
                expected: "Type",
                found: NodeKind::SIMPLE_STATEMENT,
            }
        );
    }

    #[test]
    fn test_extend_from_overrides() {
        let mut base = Registry::new("base");
        base.register(NodeKind::TYPE, Constant("base"));
        base.register(NodeKind::GENERIC, Constant("generic"));

        let mut overrides = Registry::new("overrides");
        overrides.register(NodeKind::TYPE, Constant("override"));

        base.extend_from(&overrides);
        assert_eq!(base.kinds().collect::<Vec<_>>(), vec![NodeKind::TYPE, NodeKind::GENERIC]);

        let ty = Type::of("int");
        assert_eq!(render_with(base, NodeRef::from(&ty)), Ok(Fragment::present("override")));
    }
}

//! Stencil - type-driven rendering of source code models.
//!
//! Translators build a model tree ([`stencil_core::model`]) describing a
//! source file. The engine renders it by looking up a renderer for each
//! node's kind in a per-dialect [`registry::Registry`] and combining the
//! children's output with absence-aware joins.

pub mod config;
pub mod lifecycle;
pub mod registry;
pub mod views;

mod error;
mod generator;
mod meta;

pub use stencil_core::{Fragment, RenderError, combine, format, model};
pub use stencil_parser::{parse_generic, parse_type};

pub use error::StencilError;
pub use generator::{Generator, ImportScope};
pub use meta::Meta;

use std::sync::Arc;

use log::{debug, info};

use config::AppConfig;
use lifecycle::{Lifecycle, LifecycleError, Phase, State};
use model::{File, NodeKind, NodeRef};
use registry::{Registry, Renderer};

/// Builder assembling the renderer registry of an [`Engine`].
///
/// Registration happens through lifecycle hooks: the configured dialect is
/// installed while loading, renderers added here override it while
/// resolving, and [`EngineBuilder::build`] freezes the result.
///
/// # Examples
///
/// ```
/// use stencil::{Engine, Fragment, config::AppConfig, model::{NodeKind, Statement}};
///
/// let engine = Engine::builder(AppConfig::default())
///     .with_renderer_fn(NodeKind::STATEMENT, |_, _| Ok(Fragment::present("/* elided */")))
///     .build()
///     .expect("Failed to build engine");
///
/// let statement = Statement::of("x();");
/// let rendered = engine.render(&statement).expect("Failed to render");
/// assert_eq!(rendered, Fragment::present("/* elided */"));
/// ```
pub struct EngineBuilder {
    config: AppConfig,
    lifecycle: Lifecycle<Registry>,
}

impl EngineBuilder {
    /// Create a builder that installs the dialect named by `config`.
    pub fn new(config: AppConfig) -> Self {
        let mut lifecycle = Lifecycle::new();
        let dialect = config.dialect().to_string();
        lifecycle.on(Phase::PreLoad, move |registry: &mut Registry| {
            let install = views::installer(&dialect).ok_or_else(|| {
                let known = views::dialects().collect::<Vec<_>>().join(", ");
                LifecycleError::hook(
                    Phase::PreLoad,
                    format!("unknown dialect `{dialect}` (available: {known})"),
                )
            })?;
            install(registry);
            debug!(dialect, renderers = registry.len(); "Installed dialect views");
            Ok(())
        });

        Self { config, lifecycle }
    }

    /// Register `renderer` for `kind`, replacing the dialect's renderer.
    pub fn with_renderer(mut self, kind: NodeKind, renderer: impl Renderer + 'static) -> Self {
        let renderer: Arc<dyn Renderer> = Arc::new(renderer);
        self.lifecycle.on(Phase::PreResolve, move |registry: &mut Registry| {
            registry.register_shared(kind, Arc::clone(&renderer));
            Ok(())
        });
        self
    }

    /// Register a closure as the renderer for `kind`.
    pub fn with_renderer_fn<F>(self, kind: NodeKind, render: F) -> Self
    where
        F: Fn(&Generator, NodeRef<'_>) -> Result<Fragment, RenderError> + Send + Sync + 'static,
    {
        let mut overrides = Registry::new(self.config.dialect());
        overrides.register_fn(kind, render);
        self.with_registry(overrides)
    }

    /// Merge every renderer of `overrides` over the dialect's renderers.
    pub fn with_registry(mut self, overrides: Registry) -> Self {
        self.lifecycle.on(Phase::PreResolve, move |registry: &mut Registry| {
            registry.extend_from(&overrides);
            Ok(())
        });
        self
    }

    /// Run `hook` against the registry during `phase`.
    pub fn on<F>(mut self, phase: Phase, hook: F) -> Self
    where
        F: FnMut(&mut Registry) -> Result<(), LifecycleError> + Send + 'static,
    {
        self.lifecycle.on(phase, hook);
        self
    }

    /// Run the start-up phases and freeze the registry.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::Lifecycle`] if the dialect is unknown or a
    /// hook fails.
    pub fn build(mut self) -> Result<Engine, StencilError> {
        let mut registry = Registry::new(self.config.dialect());
        self.lifecycle.run_to_start(&mut registry)?;
        info!(dialect = registry.dialect(), renderers = registry.len(); "Engine started");

        Ok(Engine {
            registry: Arc::new(registry),
            config: self.config,
            lifecycle: self.lifecycle,
        })
    }
}

/// A started rendering engine.
///
/// # Examples
///
/// ```
/// use stencil::{Engine, config::AppConfig, model::{Class, File, Modifier}};
///
/// let engine = Engine::new(AppConfig::default()).expect("Failed to build engine");
///
/// let file = File::of("com/acme/Empty.java")
///     .with_declaration(Class::new("Empty").with_modifier(Modifier::Public));
/// let text = engine.render_file(&file).expect("Failed to render");
/// assert_eq!(text, "package com.acme;\n\npublic class Empty {\n}\n");
/// ```
pub struct Engine {
    registry: Arc<Registry>,
    config: AppConfig,
    lifecycle: Lifecycle<Registry>,
}

impl Engine {
    pub fn builder(config: AppConfig) -> EngineBuilder {
        EngineBuilder::new(config)
    }

    /// Build an engine with only the configured dialect's views.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::Lifecycle`] if the dialect is unknown.
    pub fn new(config: AppConfig) -> Result<Self, StencilError> {
        EngineBuilder::new(config).build()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> State {
        self.lifecycle.state()
    }

    /// A generator over the frozen registry with the configured formatting.
    pub fn generator(&self) -> Generator {
        Generator::new(Arc::clone(&self.registry)).with_formatting(self.config.formatting().clone())
    }

    /// Render any node.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::Render`] if the node or a descendant cannot
    /// be rendered.
    pub fn render<'n>(&self, node: impl Into<NodeRef<'n>>) -> Result<Fragment, StencilError> {
        Ok(self.generator().on(node)?)
    }

    /// Render a file to its complete text; an empty file yields `""`.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::Render`] if any node of the file cannot be
    /// rendered.
    pub fn render_file(&self, file: &File) -> Result<String, StencilError> {
        info!(file = file.name(); "Rendering file");
        Ok(self.render(file)?.text_or_empty())
    }

    /// Render a file and pair the text with the model.
    ///
    /// # Errors
    ///
    /// Same as [`Engine::render_file`].
    pub fn render_meta(&self, file: File) -> Result<Meta<File, String>, StencilError> {
        let text = self.render_file(&file)?;
        Ok(Meta::new(file, text))
    }

    /// Run the shutdown hooks.
    ///
    /// # Errors
    ///
    /// Returns [`StencilError::Lifecycle`] if a stop hook fails.
    pub fn stop(self) -> Result<(), StencilError> {
        let Self {
            registry,
            mut lifecycle,
            ..
        } = self;
        let mut registry = Arc::unwrap_or_clone(registry);
        lifecycle.stop(&mut registry)?;
        info!("Engine stopped");
        Ok(())
    }
}

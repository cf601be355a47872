//! Views rendering the model tree as Java source.
//!
//! [`install`] registers one view per built-in node kind. Declarations are
//! rendered with a generator scoped to the enclosing file's imports, so
//! imported and `java.lang` types print their simple names.
//!
//! # Example
//!
//! ```
//! # use std::sync::Arc;
//! # use stencil::{Generator, views::java};
//! # use stencil_core::model::{Class, File, Field, Modifier, Type};
//! let file = File::of("com/acme/User.java").with_declaration(
//!     Class::new("User")
//!         .with_modifier(Modifier::Public)
//!         .with_field(Field::of("name", Type::of("java.lang.String")).with_modifier(Modifier::Private)),
//! );
//!
//! let generator = Generator::new(Arc::new(java::registry()));
//! let text = generator.on(&file).unwrap().text_or_empty();
//! assert_eq!(
//!     text,
//!     "package com.acme;\n\npublic class User {\n    private String name;\n}\n"
//! );
//! ```

mod class;
mod file;
mod javadoc;
mod method;
mod statement;
mod ty;

use indexmap::IndexSet;

use stencil_core::{
    Fragment, RenderError,
    combine::{self, Joiner},
    format::SPACE,
    model::{
        Class, Field, File, Generic, Import, Interface, Javadoc, JavadocTag, Method, Modifier,
        NodeKind, Parameter, Statement, Type,
    },
};

use crate::{generator::Generator, registry::Registry};

pub use class::{ClassView, InterfaceView};
pub use file::{FileView, ImportView};
pub use javadoc::{JavadocTagView, JavadocView};
pub use method::{FieldView, MethodView, ParameterView};
pub use statement::StatementView;
pub use ty::{GenericView, TypeView};

/// Name of this dialect.
pub const DIALECT: &str = "java";

const TYPE_PARAMETERS: Joiner<'static> = Joiner::new(", ").with_prefix("<").with_suffix(">");
const THROWS: Joiner<'static> = Joiner::new(", ").with_prefix("throws ");
const IMPLEMENTS: Joiner<'static> = Joiner::new(", ").with_prefix("implements ");
const EXTENDS: Joiner<'static> = Joiner::new(", ").with_prefix("extends ");

/// Register every Java view in `registry`, replacing existing renderers
/// for the same kinds.
pub fn install(registry: &mut Registry) {
    registry.install_view::<File, _>(NodeKind::FILE, FileView);
    registry.install_view::<Import, _>(NodeKind::IMPORT, ImportView);
    registry.install_view::<Class, _>(NodeKind::CLASS, ClassView);
    registry.install_view::<Interface, _>(NodeKind::INTERFACE, InterfaceView);
    registry.install_view::<Method, _>(NodeKind::METHOD, MethodView);
    registry.install_view::<Field, _>(NodeKind::FIELD, FieldView);
    registry.install_view::<Parameter, _>(NodeKind::PARAMETER, ParameterView);
    registry.install_view::<Type, _>(NodeKind::TYPE, TypeView);
    registry.install_view::<Generic, _>(NodeKind::GENERIC, GenericView);
    registry.install_view::<Javadoc, _>(NodeKind::JAVADOC, JavadocView);
    registry.install_view::<JavadocTag, _>(NodeKind::JAVADOC_TAG, JavadocTagView);
    // Simple and composite statements both resolve through the capability.
    registry.install_view::<Statement, _>(NodeKind::STATEMENT, StatementView);
}

/// A registry holding only the Java views.
pub fn registry() -> Registry {
    let mut registry = Registry::new(DIALECT);
    install(&mut registry);
    registry
}

/// Modifier keywords in insertion order, space separated.
fn modifier_list(modifiers: &IndexSet<Modifier>) -> Fragment {
    combine::join(
        modifiers.iter().map(|modifier| Fragment::present(modifier.as_str())),
        SPACE,
    )
}

/// Prefix `body` with the rendered javadoc on its own line.
fn with_javadoc(
    generator: &Generator,
    javadoc: Option<&Javadoc>,
    body: String,
) -> Result<Fragment, RenderError> {
    let doc = generator.on_optional(javadoc)?;
    Ok(combine::join(
        [doc, Fragment::present(body)],
        generator.formatting().newline(),
    ))
}

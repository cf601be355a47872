//! The model tree handed to renderers.
//!
//! Translators build a tree of model nodes describing a source file; the
//! rendering engine only ever reads it. Each node type owns its children
//! exclusively (plain `Vec` and `IndexSet` fields), so a node cannot be
//! attached to two parents and children are fixed once the parent is
//! built. Children are kept in insertion order, which is also the order in
//! which they are rendered.
//!
//! # Node identity
//!
//! Renderers are looked up by [`NodeKind`], a stable tag that every node
//! reports, followed by the node's declared capabilities (for example a
//! composite statement is also a [`NodeKind::STATEMENT`]). A borrowed,
//! type-erased view of any node is a [`NodeRef`].
//!
//! # Example
//!
//! ```
//! # use stencil_core::model::{Generic, NodeKind, NodeRef, Statement, Type};
//! // Box<Pair<K, V>>
//! let pair = Type::of("Pair")
//!     .with_generic(Generic::of_type(Type::of("K")))
//!     .with_generic(Generic::of_type(Type::of("V")));
//! let boxed = Type::of("Box").with_generic(Generic::of_type(pair));
//! assert_eq!(boxed.generics().len(), 1);
//!
//! let body = Statement::composite([Statement::of("a();"), Statement::of("b();")]);
//! let node = NodeRef::from(&body);
//! assert_eq!(node.kind(), NodeKind::COMPOSITE_STATEMENT);
//! assert_eq!(node.capabilities(), &[NodeKind::STATEMENT]);
//! ```

mod declaration;
mod file;
mod javadoc;
mod kind;
mod member;
mod modifier;
mod node;
mod statement;
mod ty;

pub use declaration::{Class, Declaration, Interface};
pub use file::{File, Import};
pub use javadoc::{Javadoc, JavadocTag};
pub use kind::NodeKind;
pub use member::{Field, Method, Parameter};
pub use modifier::{Modifier, UnknownModifier};
pub use node::{CustomNode, FromNode, NodeRef};
pub use statement::Statement;
pub use ty::{BoundType, Generic, Type};

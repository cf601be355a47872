//! Type-erased, borrowed views of model nodes.

use std::{any::Any, fmt};

use super::{
    Class, Declaration, Field, File, Generic, Import, Interface, Javadoc, JavadocTag, Method,
    NodeKind, Parameter, Statement, Type,
};

const DECLARATION_CAPABILITIES: &[NodeKind] = &[NodeKind::DECLARATION];
const STATEMENT_CAPABILITIES: &[NodeKind] = &[NodeKind::STATEMENT];

/// A node type defined outside this crate.
///
/// Custom nodes take part in dispatch exactly like the built-in ones: they
/// report a [`NodeKind`] and an ordered capability set, and renderers
/// registered for any of those kinds can render them. A renderer recovers
/// the concrete type through [`NodeRef::downcast_custom`].
///
/// # Example
///
/// ```
/// # use std::any::Any;
/// # use stencil_core::model::{CustomNode, NodeKind, NodeRef};
/// #[derive(Debug)]
/// struct Annotation(String);
///
/// impl CustomNode for Annotation {
///     fn kind(&self) -> NodeKind {
///         NodeKind::new("acme.annotation")
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let annotation = Annotation("Override".to_string());
/// let node = NodeRef::from(&annotation as &dyn CustomNode);
/// assert_eq!(node.kind().name(), "acme.annotation");
/// assert!(node.downcast_custom::<Annotation>().is_some());
/// ```
pub trait CustomNode: Any + fmt::Debug + Send + Sync {
    /// The exact kind of this node.
    fn kind(&self) -> NodeKind;

    /// Kinds this node is also compatible with, most specific first.
    fn capabilities(&self) -> &[NodeKind] {
        &[]
    }

    /// Upcast used by renderers to recover the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// A borrowed view of any model node.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    File(&'a File),
    Import(&'a Import),
    Class(&'a Class),
    Interface(&'a Interface),
    Method(&'a Method),
    Field(&'a Field),
    Parameter(&'a Parameter),
    Type(&'a Type),
    Generic(&'a Generic),
    Statement(&'a Statement),
    Javadoc(&'a Javadoc),
    JavadocTag(&'a JavadocTag),
    Custom(&'a dyn CustomNode),
}

impl<'a> NodeRef<'a> {
    /// The exact kind of the referenced node.
    pub fn kind(&self) -> NodeKind {
        match *self {
            Self::File(_) => NodeKind::FILE,
            Self::Import(_) => NodeKind::IMPORT,
            Self::Class(_) => NodeKind::CLASS,
            Self::Interface(_) => NodeKind::INTERFACE,
            Self::Method(_) => NodeKind::METHOD,
            Self::Field(_) => NodeKind::FIELD,
            Self::Parameter(_) => NodeKind::PARAMETER,
            Self::Type(_) => NodeKind::TYPE,
            Self::Generic(_) => NodeKind::GENERIC,
            Self::Statement(statement) => statement.kind(),
            Self::Javadoc(_) => NodeKind::JAVADOC,
            Self::JavadocTag(_) => NodeKind::JAVADOC_TAG,
            Self::Custom(node) => node.kind(),
        }
    }

    /// The capabilities the referenced node declares, most specific first.
    ///
    /// The exact kind is not repeated here.
    pub fn capabilities(&self) -> &'a [NodeKind] {
        match *self {
            Self::Class(_) | Self::Interface(_) => DECLARATION_CAPABILITIES,
            Self::Statement(_) => STATEMENT_CAPABILITIES,
            Self::Custom(node) => node.capabilities(),
            _ => &[],
        }
    }

    /// Recovers a custom node's concrete type.
    ///
    /// Returns `None` for built-in nodes and for custom nodes of another type.
    pub fn downcast_custom<T: CustomNode>(&self) -> Option<&'a T> {
        match *self {
            Self::Custom(node) => node.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// Extraction of a concrete model type from a [`NodeRef`].
///
/// Implemented for every built-in node type. Custom node types implement
/// it through [`NodeRef::downcast_custom`] to be usable with typed views.
pub trait FromNode {
    /// Returns the concrete node if `node` refers to this type.
    fn from_node(node: NodeRef<'_>) -> Option<&'_ Self>;
}

macro_rules! node_variants {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for NodeRef<'a> {
                fn from(node: &'a $ty) -> Self {
                    Self::$variant(node)
                }
            }

            impl FromNode for $ty {
                fn from_node(node: NodeRef<'_>) -> Option<&'_ Self> {
                    match node {
                        NodeRef::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

node_variants! {
    File => File,
    Import => Import,
    Class => Class,
    Interface => Interface,
    Method => Method,
    Field => Field,
    Parameter => Parameter,
    Type => Type,
    Generic => Generic,
    Statement => Statement,
    Javadoc => Javadoc,
    JavadocTag => JavadocTag,
}

impl<'a> From<&'a dyn CustomNode> for NodeRef<'a> {
    fn from(node: &'a dyn CustomNode) -> Self {
        Self::Custom(node)
    }
}

impl<'a> From<&'a Declaration> for NodeRef<'a> {
    fn from(declaration: &'a Declaration) -> Self {
        match declaration {
            Declaration::Class(class) => Self::Class(class),
            Declaration::Interface(interface) => Self::Interface(interface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker;

    impl CustomNode for Marker {
        fn kind(&self) -> NodeKind {
            NodeKind::new("test.marker")
        }

        fn capabilities(&self) -> &[NodeKind] {
            &[NodeKind::STATEMENT]
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_statement_kinds_and_capabilities() {
        let simple = Statement::of("x();");
        let composite = Statement::composite([]);

        assert_eq!(NodeRef::from(&simple).kind(), NodeKind::SIMPLE_STATEMENT);
        assert_eq!(NodeRef::from(&composite).kind(), NodeKind::COMPOSITE_STATEMENT);
        assert_eq!(NodeRef::from(&composite).capabilities(), &[NodeKind::STATEMENT]);
    }

    #[test]
    fn test_declaration_capability() {
        let declaration = Declaration::from(Class::new("User"));
        let node = NodeRef::from(&declaration);
        assert_eq!(node.kind(), NodeKind::CLASS);
        assert_eq!(node.capabilities(), &[NodeKind::DECLARATION]);
    }

    #[test]
    fn test_leaf_nodes_have_no_capabilities() {
        let ty = Type::of("int");
        assert!(NodeRef::from(&ty).capabilities().is_empty());
    }

    #[test]
    fn test_from_node_matches_variant_only() {
        let ty = Type::of("String");
        let node = NodeRef::from(&ty);
        assert_eq!(Type::from_node(node).map(Type::name), Some("String"));
        assert!(Statement::from_node(node).is_none());
    }

    #[test]
    fn test_custom_node_dispatch_identity() {
        let marker = Marker;
        let node = NodeRef::from(&marker as &dyn CustomNode);

        assert_eq!(node.kind(), NodeKind::new("test.marker"));
        assert_eq!(node.capabilities(), &[NodeKind::STATEMENT]);
        assert!(node.downcast_custom::<Marker>().is_some());

        let ty = Type::of("int");
        assert!(NodeRef::from(&ty).downcast_custom::<Marker>().is_none());
    }
}

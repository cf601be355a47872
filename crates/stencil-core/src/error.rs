//! Errors raised while rendering a model tree.

use thiserror::Error;

use crate::model::NodeKind;

/// A failure to render a node.
///
/// Every variant aborts the render call that raised it and all calls
/// containing it; renderers propagate these with `?` and never turn them
/// into absent output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No renderer is registered for the node kind or any of its capabilities.
    #[error("no renderer registered for `{kind}` (capabilities: [{}])", join_kinds(.capabilities))]
    NoRendererFound {
        kind: NodeKind,
        capabilities: Vec<NodeKind>,
    },

    /// A required child of a node is missing.
    #[error("malformed {node}: {reason}")]
    MalformedModel { node: NodeKind, reason: String },

    /// A renderer was handed a node it does not handle.
    #[error("expected {expected} node, found `{found}`")]
    UnexpectedNode {
        expected: &'static str,
        found: NodeKind,
    },

    /// A renderer failed for a reason of its own.
    #[error("renderer for `{kind}` failed: {message}")]
    Renderer { kind: NodeKind, message: String },
}

impl RenderError {
    /// Creates a [`RenderError::MalformedModel`] for `node`.
    pub fn malformed(node: NodeKind, reason: impl Into<String>) -> Self {
        Self::MalformedModel {
            node,
            reason: reason.into(),
        }
    }

    /// Creates a [`RenderError::Renderer`] failure for `kind`.
    pub fn renderer(kind: NodeKind, message: impl Into<String>) -> Self {
        Self::Renderer {
            kind,
            message: message.into(),
        }
    }
}

fn join_kinds(kinds: &[NodeKind]) -> String {
    kinds
        .iter()
        .map(NodeKind::name)
        .collect::<Vec<_>>()
        .join(", ")
}

use alloc::string::String;

use thiserror::Error;
use vc_markup::MarshalError;

// -----------------------------------------------------------------------------
// WriterError

/// A call sequence a [`TreeWriter`](crate::TreeWriter) cannot turn into a
/// well-formed [`Node`](crate::Node) tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WriterError {
    #[error("node `{node}` has children, its text cannot be set")]
    TextInContainer { node: String },

    #[error("node `{node}` has text, child `{child}` cannot be started")]
    ChildInTextNode { node: String, child: String },

    #[error("attribute `{name}` added to node `{node}` after its content")]
    AttributeAfterContent { node: String, name: String },

    #[error("node `{node}` already has attribute `{name}`")]
    DuplicateAttribute { node: String, name: String },

    #[error("`end_node` called on the root node")]
    UnbalancedEnd,

    #[error("{open} node(s) still open when finishing")]
    Unclosed { open: usize },
}

// -----------------------------------------------------------------------------
// DocumentError

/// An error from [`to_tree`](crate::to_tree).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    #[error(transparent)]
    Marshal(#[from] MarshalError),

    #[error(transparent)]
    Writer(#[from] WriterError),
}

use alloc::string::String;

use thiserror::Error;

/// An error that aborts a marshal.
///
/// Member-level failures never abort; they are logged and reported through
/// [`MarshalReport`](crate::marshal::MarshalReport). The only way a marshal
/// fails is an object graph nested deeper than
/// [`MarshalConfig::max_depth`](crate::MarshalConfig::max_depth).
///
/// Every node opened before the error is closed again, so the writer is left
/// balanced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MarshalError {
    #[error("object graph is deeper than {max_depth} nodes at node `{node}`")]
    DepthExceeded { max_depth: usize, node: String },
}

//! The type classifier: primitive or composite, attribute or child node.
//!
//! - [`AttributeRegistry`]: which members of a type render as attributes.
//! - [`TypeClassifier`]: read-only queries used during a marshal.

// -----------------------------------------------------------------------------
// Modules

mod classifier;
mod registry;

// -----------------------------------------------------------------------------
// Exports

pub use classifier::TypeClassifier;
pub use registry::AttributeRegistry;

pub(crate) use registry::normalize;

//! The graph marshaller.
//!
//! A [`Marshaller`] walks a `&dyn Reflect` depth-first and emits
//! [`HierarchicalWriter`](crate::HierarchicalWriter) calls:
//!
//! - `None` values emit nothing.
//! - Primitives set the text of the open node.
//! - Sequences open one node per element, named after the element's type.
//! - Structs add their registered attributes to the open node, then open one
//!   child node per member.
//! - Opaque values set empty text.

// -----------------------------------------------------------------------------
// Modules

mod marshaller;
mod report;

pub mod naming;

// -----------------------------------------------------------------------------
// Exports

pub use marshaller::Marshaller;
pub use report::MarshalReport;

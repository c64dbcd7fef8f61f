//! Static type information.
//!
//! - [`TypePath`]: stable type paths and the unqualified type ident.
//! - [`Typed`]: a static accessor to [`TypeInfo`].
//! - [`TypeInfo`]: identity, names and [`TypeKind`] of a type.
//! - [`PrimitiveKind`]: the leaf value types rendered as text.

// -----------------------------------------------------------------------------
// Modules

mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use type_info::{PrimitiveKind, ReflectKind, Type, TypeInfo, TypeKind};
pub use type_path::{DynamicTypePath, TypePath};
pub use typed::{DynamicTyped, Typed};

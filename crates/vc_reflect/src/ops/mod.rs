//! Provide the kind-specific views of a reflected value.
//!
//! The following are subtraits of [`Reflect`], reached through
//! [`Reflect::reflect_ref`]:
//!
//! - [`Primitive`]: leaf values rendered as text (e.g. `u32`, `String`).
//! - [`Struct`]: values with named members, the member enumerator.
//! - [`List`]: ordered sequences (e.g. `Vec<T>`).
//!
//! Values that fit none of these are [`ReflectRef::Opaque`]; an absent
//! value (`Option::None`) is [`ReflectRef::Null`].
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref

// -----------------------------------------------------------------------------
// Modules

mod access_error;
mod kind;
mod list_ops;
mod primitive_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use access_error::AccessError;
pub use kind::ReflectRef;
pub use list_ops::{List, ListItemIter};
pub use primitive_ops::Primitive;
pub use struct_ops::{Accessor, Member, MemberIter, MemberValue, Struct};

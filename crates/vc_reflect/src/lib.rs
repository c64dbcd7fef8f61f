//! Runtime reflection for the `vc_marshal` crates.
//!
//! The crate answers three questions about a value without a static schema:
//!
//! - What is its type? ([`TypePath`], [`Typed`], [`TypeInfo`])
//! - What kind of value is it? ([`Reflect::reflect_ref`] returns a [`ReflectRef`])
//! - What does it contain? ([`Primitive`] text, [`Struct`] members, [`List`] items)
//!
//! [`Struct`] is the member enumerator: a finite, lazy, restartable sequence of
//! named accessors. It is implemented by [`#[derive(Reflect)]`](derive::Reflect)
//! for structs with named fields, or by hand for computed or fallible members.
//!
//! # Examples
//!
//! ```
//! use vc_reflect::{Reflect, derive::Reflect, ops::ReflectRef};
//!
//! #[derive(Reflect)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let person = Person { name: "wubp".into(), age: 29 };
//!
//! let ReflectRef::Struct(value) = person.reflect_ref() else { unreachable!() };
//! let names: Vec<_> = value.members().map(|m| m.name()).collect();
//! assert_eq!(names, ["name", "age"]);
//! ```
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed
//! [`TypeInfo`]: crate::info::TypeInfo
//! [`ReflectRef`]: crate::ops::ReflectRef
//! [`Primitive`]: crate::ops::Primitive
//! [`Struct`]: crate::ops::Struct
//! [`List`]: crate::ops::List
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vc_reflect::...` paths, which must also resolve
// inside this crate's own tests.
extern crate self as vc_reflect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use reflection::Reflect;
pub use vc_reflect_derive as derive;

//! Reflection implementations for foreign types, plus shared helpers.
//!
//! - [`struct_debug`]: Used to implement [`Reflect::reflect_debug`] for structs.
//! - [`list_debug`]: Used to implement [`Reflect::reflect_debug`] for lists.
//!
//! ## Implemented Menu
//!
//! - primitive:
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `bool`, `char`
//!     - `&'static str`, `String`, `Cow<'static, str>`
//! - optional: `Option<T>`
//! - list: `Vec<T>`, `VecDeque<T>`
//! - boxed: `Box<T>` (transparent), `Box<dyn Reflect>` (runtime type)
//! - opaque: `()`
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod boxed;
mod debug;
mod list;
mod option;
mod primitive;

// -----------------------------------------------------------------------------
// Exports

pub use debug::{list_debug, struct_debug};

//! See [`Reflect`](derive_full_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }`)
///
/// Unit structs (`struct T;`) are treated as `Opaque`. Tuple structs,
/// enums and unions are rejected.
///
/// ## Custom Type Path
///
/// The default path is `module_path!()` followed by the type name.
/// It can be overridden at the type level:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "hr::staff::Employee")]
/// struct Employee { /* ... */ }
/// ```
///
/// The last segment becomes the type ident, the rest the module path.
///
/// ## Opaque Types
///
/// `#[reflect(opaque)]` forces a struct to be treated as `Opaque`: its
/// fields are not looked into and it renders without children.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(opaque)]
/// struct Handle { raw: u64 }
/// ```
///
/// ## Field Attributes
///
/// - `#[reflect(skip)]`: the field gets no accessor.
/// - `#[reflect(rename = "...")]`: the accessor is named `...` instead of
///   the field name.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Person {
///     #[reflect(rename = "getName")]
///     name: String,
///     #[reflect(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Generics
///
/// Every type parameter gets a `Reflect + Typed` bound. The type path of a
/// generic type is [`core::any::type_name`] of the instantiated type.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_full_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectDerive::from_input(&ast) {
        Ok(derive) => impls::impl_reflect_derive(&derive).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

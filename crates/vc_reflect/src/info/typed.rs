use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Examples
///
/// ```
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     value: i32,
/// }
///
/// let info = <A as Typed>::type_info();
/// assert!(info.is_struct());
/// assert_eq!(info.type_ident(), "A");
/// ```
///
/// Note: Use [`DynamicTyped`] for dynamic dispatch.
pub trait Typed: TypePath {
    /// Returns the static type information of `Self`.
    fn type_info() -> TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// Returns the static [`TypeInfo`] of the concrete type behind `self`.
    ///
    /// This is the declared type: for `Option<T>` it is the option itself.
    /// See [`Reflect::represented_type_info`](crate::Reflect::represented_type_info)
    /// for the type of the value currently held.
    fn reflect_type_info(&self) -> TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> TypeInfo {
        Self::type_info()
    }
}

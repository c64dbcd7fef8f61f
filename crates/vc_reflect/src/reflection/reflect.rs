use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind, TypeInfo};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`vc_reflect`].
///
/// This trait exposes a value's type and shape without compile-time
/// knowledge of the concrete type. Consumers such as the marshaller only
/// ever hold a `&dyn Reflect`.
///
/// # Recommendations
///
/// Use [the derive macro for `Reflect`] rather than implementing this trait
/// by hand. The derive macro also implements [`TypePath`], [`Typed`] and the
/// [`Struct`] member enumerator.
///
/// # Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the container's type ID,
/// not the inner value's. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use vc_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>()); // Container type ID
/// assert!(x.ty_id() == TypeId::of::<i32>());   // Preferred method
/// ```
///
/// # Type Casting
///
/// Use [`reflect_ref`] to reach a kind-specific view ([`Primitive`],
/// [`Struct`], [`List`]), and `downcast_ref` for a concrete type:
///
/// ```rust
/// # use vc_reflect::Reflect;
/// let x: Box<dyn Reflect> = 10_u8.into_boxed_reflect();
/// assert_eq!(x.downcast_ref::<u8>(), Some(&10));
/// assert!(x.reflect_ref().as_primitive().is_some());
/// ```
///
/// # Manual Implementation
///
/// Types the reflection system should not look into can be reported as
/// opaque:
///
/// ```rust
/// use vc_reflect::Reflect;
/// use vc_reflect::info::{TypeInfo, TypeKind, TypePath, Typed};
/// use vc_reflect::ops::ReflectRef;
///
/// struct Handle(u64);
///
/// impl TypePath for Handle {
///     fn type_path() -> &'static str { "my_crate::Handle" }
///     fn type_name() -> &'static str { "Handle" }
///     fn type_ident() -> &'static str { "Handle" }
/// }
///
/// impl Typed for Handle {
///     fn type_info() -> TypeInfo { TypeInfo::new::<Self>(TypeKind::Opaque) }
/// }
///
/// impl Reflect for Handle {
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// }
///
/// assert!(Handle(1).reflect_ref().is_opaque());
/// ```
///
/// [`vc_reflect`]: crate
/// [the derive macro for `Reflect`]: crate::derive::Reflect
/// [`TypePath`]: crate::info::TypePath
/// [`Typed`]: crate::info::Typed
/// [`Primitive`]: crate::ops::Primitive
/// [`Struct`]: crate::ops::Struct
/// [`List`]: crate::ops::List
/// [`reflect_ref`]: Reflect::reflect_ref
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    ///
    /// Wrappers that forward to an inner value (such as `Box<dyn Reflect>`)
    /// return the inner value's id.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [`TypeInfo`] of the value currently held.
    ///
    /// For most types this equals [`reflect_type_info`]. `Option<T>` holding
    /// `Some` and `Box<dyn Reflect>` report the inner value's type instead.
    ///
    /// [`reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
    #[inline]
    fn represented_type_info(&self) -> TypeInfo {
        self.reflect_type_info()
    }

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::{Reflect, ops::List};
    /// let vec = vec![1, 2, 3];
    ///
    /// let list: &dyn List = vec.reflect_ref().as_list().unwrap();
    /// assert_eq!(list.len(), 3);
    /// ```
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a pure enumeration of ["kinds"](ReflectKind) of the value.
    ///
    /// ```
    /// # use vc_reflect::{Reflect, info::ReflectKind};
    /// assert_eq!(vec![1, 2, 3].reflect_kind(), ReflectKind::List);
    /// assert_eq!(None::<u8>.reflect_kind(), ReflectKind::Null);
    /// ```
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        self.reflect_ref().kind()
    }

    /// Debug formatter for the value.
    ///
    /// Primitives print their text, structs print their members,
    /// lists print their items and opaque values print `Opaque(type_path)`.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Primitive(value) => value.write_text(f),
            ReflectRef::Struct(value) => crate::impls::struct_debug(value, f),
            ReflectRef::List(value) => crate::impls::list_debug(value, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
            ReflectRef::Null => f.write_str("None"),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// Looks through wrappers that forward [`Reflect::ty_id`],
    /// so a `Box<dyn Reflect>` holding a `T` downcasts to `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        if let Some(value) = <dyn Any>::downcast_ref::<T>(self) {
            return Some(value);
        }
        <dyn Any>::downcast_ref::<Box<dyn Reflect>>(self)
            .and_then(|inner| inner.as_ref().downcast_ref::<T>())
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use core::any::TypeId;

    #[test]
    fn boxed_reports_inner_type() {
        let x: Box<dyn Reflect> = String::from("a").into_boxed_reflect();
        let y: Box<dyn Reflect> = Box::new(x);
        assert_eq!(y.ty_id(), TypeId::of::<String>());
        assert!(y.represented_type_info().type_is::<String>());
        assert_eq!(y.downcast_ref::<String>().map(String::as_str), Some("a"));
    }

    #[test]
    fn debug_output() {
        let v: &dyn Reflect = &vec![Some(1_u8), None];
        assert_eq!(format!("{v:?}"), "[1, None]");
    }
}

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{List, Primitive, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of the "kinds" of a reflected value.
///
/// Each variant contains a trait object with methods specific to that kind.
///
/// A [`ReflectRef`] is obtained via [`Reflect::reflect_ref`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Primitive(&'a dyn Primitive),
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Opaque(&'a dyn Reflect),
    /// An absent value, such as `Option::None`.
    Null,
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $ty:ty) => {
        /// Returns the kind-specific view, or `None` for other kinds.
        #[inline]
        pub fn $name(self) -> Option<&'a $ty> {
            match self {
                Self::$kind(value) => Some(value),
                _ => None,
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_cast_method!(as_primitive: Primitive => dyn Primitive);
    impl_cast_method!(as_struct: Struct => dyn Struct);
    impl_cast_method!(as_list: List => dyn List);

    /// Returns the [`ReflectKind`] of this value.
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Opaque(_) => ReflectKind::Opaque,
            Self::Null => ReflectKind::Null,
        }
    }

    /// Returns `true` for [`ReflectRef::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`ReflectRef::Opaque`].
    #[inline]
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque(_))
    }
}

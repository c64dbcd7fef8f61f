use core::any::TypeId;

use crate::Reflect;
use crate::info::{TypeInfo, TypeKind, TypePath, Typed};
use crate::ops::ReflectRef;

// `Option<T>` is transparent: `Some(v)` reflects as `v`, `None` as `Null`.

impl<T: Typed> TypePath for Option<T> {
    #[inline]
    fn type_path() -> &'static str {
        ::core::any::type_name::<Self>()
    }

    #[inline]
    fn type_name() -> &'static str {
        "Option"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Typed> Typed for Option<T> {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(TypeKind::Optional {
            some: T::type_info,
        })
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    #[inline]
    fn ty_id(&self) -> TypeId {
        match self {
            Some(value) => value.ty_id(),
            None => TypeId::of::<Self>(),
        }
    }

    #[inline]
    fn represented_type_info(&self) -> TypeInfo {
        match self {
            Some(value) => value.represented_type_info(),
            None => Self::type_info(),
        }
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        match self {
            Some(value) => value.reflect_ref(),
            None => ReflectRef::Null,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath};
    use alloc::string::String;
    use core::any::TypeId;

    #[test]
    fn some_is_transparent() {
        let value: &dyn Reflect = &Some(String::from("x"));
        assert_eq!(value.reflect_kind(), ReflectKind::Primitive);
        assert_eq!(value.ty_id(), TypeId::of::<String>());
        assert!(value.represented_type_info().type_is::<String>());
        assert_eq!(value.reflect_type_ident(), "Option");
    }

    #[test]
    fn none_is_null() {
        let value: &dyn Reflect = &None::<u8>;
        assert!(value.reflect_ref().is_null());
        assert!(value.represented_type_info().is_optional());
        assert_eq!(<Option<u8> as TypePath>::type_path(), "core::option::Option<u8>");
    }
}

use alloc::boxed::Box;
use core::any::TypeId;

use crate::Reflect;
use crate::info::{TypeInfo, TypeKind, TypePath, Typed};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Box<dyn Reflect>

impl TypePath for Box<dyn Reflect> {
    #[inline]
    fn type_path() -> &'static str {
        "alloc::boxed::Box<dyn vc_reflect::Reflect>"
    }

    #[inline]
    fn type_name() -> &'static str {
        "Box<dyn Reflect>"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Box"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

impl Typed for Box<dyn Reflect> {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(TypeKind::Dynamic)
    }
}

impl Reflect for Box<dyn Reflect> {
    #[inline]
    fn ty_id(&self) -> TypeId {
        self.as_ref().ty_id()
    }

    #[inline]
    fn represented_type_info(&self) -> TypeInfo {
        self.as_ref().represented_type_info()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        self.as_ref().reflect_ref()
    }
}

// -----------------------------------------------------------------------------
// Box<T>

// A box is transparent: it reports the names, type info and contents of
// the value it holds. This is what makes recursive structs reflectable.

impl<T: Typed> TypePath for Box<T> {
    #[inline]
    fn type_path() -> &'static str {
        T::type_path()
    }

    #[inline]
    fn type_name() -> &'static str {
        T::type_name()
    }

    #[inline]
    fn type_ident() -> &'static str {
        T::type_ident()
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        T::module_path()
    }
}

impl<T: Typed> Typed for Box<T> {
    #[inline]
    fn type_info() -> TypeInfo {
        T::type_info()
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    #[inline]
    fn ty_id(&self) -> TypeId {
        self.as_ref().ty_id()
    }

    #[inline]
    fn represented_type_info(&self) -> TypeInfo {
        self.as_ref().represented_type_info()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        self.as_ref().reflect_ref()
    }
}

// -----------------------------------------------------------------------------
// ()

impl TypePath for () {
    #[inline]
    fn type_path() -> &'static str {
        "()"
    }

    #[inline]
    fn type_name() -> &'static str {
        "()"
    }

    #[inline]
    fn type_ident() -> &'static str {
        "()"
    }
}

impl Typed for () {
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Self>(TypeKind::Opaque)
    }
}

impl Reflect for () {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque(self)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, Typed};
    use alloc::boxed::Box;
    use core::any::TypeId;

    #[test]
    fn box_is_transparent() {
        let value: &dyn Reflect = &Box::new(5_u16);
        assert_eq!(value.ty_id(), TypeId::of::<u16>());
        assert_eq!(value.reflect_kind(), ReflectKind::Primitive);
        assert!(<Box<u16> as Typed>::type_info().type_is::<u16>());
    }

    #[test]
    fn unit_is_opaque() {
        assert_eq!(().reflect_kind(), ReflectKind::Opaque);
        assert!(<() as Typed>::type_info().as_primitive().is_none());
    }
}

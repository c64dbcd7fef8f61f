use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::{PrimitiveKind, TypeInfo, TypeKind, TypePath, Typed};
use crate::ops::{Primitive, ReflectRef};

macro_rules! impl_reflect_primitive {
    ($ty:ty, $kind:ident, $ident:literal) => {
        impl_reflect_primitive!($ty, $kind, $ident, $ident, None);
    };
    ($ty:ty, $kind:ident, $ident:literal, $path:literal, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $ident
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            #[inline]
            fn type_info() -> TypeInfo {
                TypeInfo::new::<Self>(TypeKind::Primitive(PrimitiveKind::$kind))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Primitive(self)
            }
        }

        impl Primitive for $ty {
            #[inline]
            fn primitive_kind(&self) -> PrimitiveKind {
                PrimitiveKind::$kind
            }

            #[inline]
            fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
                write!(out, "{}", self)
            }
        }
    };
}

impl_reflect_primitive!(bool, Bool, "bool");
impl_reflect_primitive!(char, Char, "char");
impl_reflect_primitive!(i8, I8, "i8");
impl_reflect_primitive!(i16, I16, "i16");
impl_reflect_primitive!(i32, I32, "i32");
impl_reflect_primitive!(i64, I64, "i64");
impl_reflect_primitive!(i128, I128, "i128");
impl_reflect_primitive!(isize, Isize, "isize");
impl_reflect_primitive!(u8, U8, "u8");
impl_reflect_primitive!(u16, U16, "u16");
impl_reflect_primitive!(u32, U32, "u32");
impl_reflect_primitive!(u64, U64, "u64");
impl_reflect_primitive!(u128, U128, "u128");
impl_reflect_primitive!(usize, Usize, "usize");
impl_reflect_primitive!(f32, F32, "f32");
impl_reflect_primitive!(f64, F64, "f64");
impl_reflect_primitive!(&'static str, Str, "str", "&str", None);
impl_reflect_primitive!(
    String,
    Str,
    "String",
    "alloc::string::String",
    Some("alloc::string")
);
impl_reflect_primitive!(
    Cow<'static, str>,
    Str,
    "Cow",
    "alloc::borrow::Cow<str>",
    Some("alloc::borrow")
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{PrimitiveKind, Typed};
    use alloc::borrow::Cow;
    use alloc::string::String;

    #[test]
    fn text_forms() {
        let cases: [(&dyn Reflect, &str); 7] = [
            (&true, "true"),
            (&'x', "x"),
            (&-7_i64, "-7"),
            (&1.5_f32, "1.5"),
            (&0.1_f64, "0.1"),
            (&"Ann", "Ann"),
            (&Cow::Borrowed("cow"), "cow"),
        ];
        for (value, text) in cases {
            let p = value.reflect_ref().as_primitive().unwrap();
            assert_eq!(p.to_text(), text);
        }
    }

    #[test]
    fn kinds() {
        assert_eq!(
            <String as Typed>::type_info().as_primitive(),
            Some(PrimitiveKind::Str)
        );
        assert_eq!(
            <&'static str as Typed>::type_info().as_primitive(),
            Some(PrimitiveKind::Str)
        );
        assert_eq!(
            <u128 as Typed>::type_info().as_primitive(),
            Some(PrimitiveKind::U128)
        );
        assert!(<f64 as Typed>::type_info().as_primitive().unwrap().is_float());
    }
}

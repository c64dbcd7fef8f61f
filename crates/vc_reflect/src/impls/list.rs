use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::info::{TypeInfo, TypeKind, TypePath, Typed};
use crate::ops::{List, ReflectRef};

macro_rules! impl_reflect_list {
    ($ty:ident, $module:literal, |$list:ident, $index:ident| $get:expr) => {
        impl<T: Typed> TypePath for $ty<T> {
            #[inline]
            fn type_path() -> &'static str {
                ::core::any::type_name::<Self>()
            }

            #[inline]
            fn type_name() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: Typed> Typed for $ty<T> {
            #[inline]
            fn type_info() -> TypeInfo {
                TypeInfo::new::<Self>(TypeKind::List { item: T::type_info })
            }
        }

        impl<T: Reflect + Typed> Reflect for $ty<T> {
            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
            }
        }

        impl<T: Reflect + Typed> List for $ty<T> {
            #[inline]
            fn len(&self) -> usize {
                <$ty<T>>::len(self)
            }

            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                let ($list, $index) = (self, index);
                $get.map(|value| value as &dyn Reflect)
            }
        }
    };
}

// `List::get` shadows the slice method on `Vec`, so go through the slice.
impl_reflect_list!(Vec, "alloc::vec", |list, index| list.as_slice().get(index));
impl_reflect_list!(VecDeque, "alloc::collections::vec_deque", |list, index| {
    VecDeque::get(list, index)
});

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn items_in_order() {
        let value = VecDeque::from(vec![3_u16, 1, 2]);
        let list = value.reflect_ref().as_list().unwrap();
        let items: vec::Vec<u16> = list
            .iter()
            .filter_map(|item| item.downcast_ref::<u16>().copied())
            .collect();
        assert_eq!(items, [3, 1, 2]);
        assert!(list.get(3).is_none());
    }

    #[test]
    fn vec_items_by_index() {
        let value = vec![String::from("a"), String::from("b")];
        let list = value.reflect_ref().as_list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.get(1).and_then(|item| item.downcast_ref::<String>()),
            Some(&String::from("b"))
        );
        assert!(list.get(2).is_none());

        let items: vec::Vec<&str> = list
            .iter()
            .filter_map(|item| item.downcast_ref::<String>().map(String::as_str))
            .collect();
        assert_eq!(items, ["a", "b"]);
    }

    #[test]
    fn empty_list() {
        let value: vec::Vec<u8> = vec![];
        let list = value.reflect_ref().as_list().unwrap();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}

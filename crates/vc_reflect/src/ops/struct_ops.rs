use alloc::boxed::Box;
use core::fmt;
use core::ops::Deref;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};
use crate::ops::AccessError;

// -----------------------------------------------------------------------------
// Accessor

/// Describes one member of a [`Struct`]: its accessor name and declared type.
///
/// The declared type is what the member's accessor returns, which may differ
/// from the runtime type of the value it holds (e.g. `Option<T>` or
/// `Box<dyn Reflect>`).
#[derive(Clone, Copy)]
pub struct Accessor {
    name: &'static str,
    declared: fn() -> TypeInfo,
}

impl Accessor {
    /// Creates an accessor whose declared type is `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            declared: T::type_info,
        }
    }

    /// Creates an accessor with an explicit declared-type function.
    #[inline]
    pub const fn with_declared(name: &'static str, declared: fn() -> TypeInfo) -> Self {
        Self { name, declared }
    }

    /// Returns the accessor name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared type of the member.
    #[inline]
    pub fn declared_type(&self) -> TypeInfo {
        (self.declared)()
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name)
            .field("declared", &self.declared_type().type_path())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// MemberValue

/// The value produced by invoking an accessor.
///
/// Fields are lent out directly; computed accessors hand over an owned value.
pub enum MemberValue<'a> {
    Borrowed(&'a dyn Reflect),
    Owned(Box<dyn Reflect>),
}

impl MemberValue<'_> {
    /// Returns the value as a `&dyn Reflect`.
    #[inline]
    pub fn as_reflect(&self) -> &dyn Reflect {
        match self {
            Self::Borrowed(value) => *value,
            Self::Owned(value) => value.as_ref(),
        }
    }
}

impl Deref for MemberValue<'_> {
    type Target = dyn Reflect;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_reflect()
    }
}

impl fmt::Debug for MemberValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_reflect().reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Struct

/// A value with named members: the member enumerator.
///
/// Members are exposed as a finite, index-ordered list of [`Accessor`]s.
/// Describing a member never runs its accessor; only [`invoke`] does,
/// and it may fail. Enumeration is restartable: every call to
/// [`members`] starts from the first accessor again.
///
/// # Derive
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements this trait for
/// structs with named fields, one accessor per field, in declaration order:
///
/// ```
/// use vc_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Person {
///     name: String,
///     #[reflect(rename = "Age")]
///     age: u32,
///     #[reflect(skip)]
///     cache: Vec<u8>,
/// }
///
/// let person = Person { name: "wubp".into(), age: 29, cache: vec![] };
/// let value = person.reflect_ref().as_struct().unwrap();
///
/// assert_eq!(value.accessor_len(), 2);
/// assert_eq!(value.accessor_at(1).unwrap().name(), "Age");
/// assert_eq!(value.invoke(1).unwrap().downcast_ref::<u32>(), Some(&29));
/// ```
///
/// Accessor names must stay distinct when case is ignored:
///
/// ```compile_fail
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Item {
///     #[reflect(rename = "Code")]
///     upper: String,
///     code: String,
/// }
/// ```
///
/// # Manual Implementation
///
/// Getter-style types with computed or fallible accessors implement it by
/// hand:
///
/// ```
/// use vc_reflect::Reflect;
/// use vc_reflect::info::{TypeInfo, TypeKind, TypePath, Typed};
/// use vc_reflect::ops::{AccessError, Accessor, MemberValue, ReflectRef, Struct};
///
/// struct Temperature { kelvin: f64 }
///
/// impl TypePath for Temperature {
///     fn type_path() -> &'static str { "weather::Temperature" }
///     fn type_name() -> &'static str { "Temperature" }
///     fn type_ident() -> &'static str { "Temperature" }
/// }
///
/// impl Typed for Temperature {
///     fn type_info() -> TypeInfo { TypeInfo::new::<Self>(TypeKind::Struct) }
/// }
///
/// impl Reflect for Temperature {
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Struct(self) }
/// }
///
/// impl Struct for Temperature {
///     fn accessor_len(&self) -> usize { 1 }
///
///     fn accessor_at(&self, index: usize) -> Option<Accessor> {
///         (index == 0).then(|| Accessor::new::<f64>("getCelsius"))
///     }
///
///     fn invoke(&self, index: usize) -> Result<MemberValue<'_>, AccessError> {
///         match index {
///             0 if self.kelvin < 0.0 => Err(AccessError::failed(
///                 Self::type_path(), "getCelsius", "negative kelvin",
///             )),
///             0 => Ok(MemberValue::Owned(Box::new(self.kelvin - 273.15))),
///             _ => Err(AccessError::OutOfRange { type_path: Self::type_path(), index }),
///         }
///     }
/// }
///
/// let t = Temperature { kelvin: -1.0 };
/// let value = t.reflect_ref().as_struct().unwrap();
/// assert!(value.invoke(0).is_err());
/// ```
///
/// [`invoke`]: Struct::invoke
/// [`members`]: Struct::members
pub trait Struct: Reflect {
    /// Returns the number of accessors.
    fn accessor_len(&self) -> usize;

    /// Returns the accessor at `index`, or `None` if out of range.
    fn accessor_at(&self, index: usize) -> Option<Accessor>;

    /// Invokes the accessor at `index`.
    fn invoke(&self, index: usize) -> Result<MemberValue<'_>, AccessError>;

    /// Returns the index of the accessor named `name`.
    fn index_of(&self, name: &str) -> Option<usize> {
        (0..self.accessor_len()).find(|&index| {
            self.accessor_at(index)
                .is_some_and(|accessor| accessor.name() == name)
        })
    }
}

impl dyn Struct {
    /// Returns a lazy iterator over the members.
    ///
    /// ```
    /// use vc_reflect::{Reflect, derive::Reflect};
    ///
    /// #[derive(Reflect)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let point = Point { x: 1, y: 2 };
    /// let value = point.reflect_ref().as_struct().unwrap();
    ///
    /// let names: Vec<_> = value.members().map(|m| m.name()).collect();
    /// assert_eq!(names, ["x", "y"]);
    /// ```
    #[inline]
    pub fn members(&self) -> MemberIter<'_> {
        MemberIter::new(self)
    }

    /// Returns the member named `name`.
    pub fn member(&self, name: &str) -> Option<Member<'_>> {
        let index = self.index_of(name)?;
        let accessor = self.accessor_at(index)?;
        Some(Member {
            owner: self,
            index,
            accessor,
        })
    }
}

// -----------------------------------------------------------------------------
// Member

/// One (name, invoke) pair yielded by [`MemberIter`].
#[derive(Clone, Copy)]
pub struct Member<'a> {
    owner: &'a dyn Struct,
    index: usize,
    accessor: Accessor,
}

impl<'a> Member<'a> {
    /// Returns the accessor name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.accessor.name()
    }

    /// Returns the accessor's position in its struct.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the declared type of the member.
    #[inline]
    pub fn declared_type(&self) -> TypeInfo {
        self.accessor.declared_type()
    }

    /// Returns the [`Accessor`] description.
    #[inline]
    pub fn accessor(&self) -> Accessor {
        self.accessor
    }

    /// Runs the accessor.
    #[inline]
    pub fn invoke(&self) -> Result<MemberValue<'a>, AccessError> {
        self.owner.invoke(self.index)
    }
}

impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("index", &self.index)
            .field("accessor", &self.accessor)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// MemberIter

/// A lazy iterator over the members of a [`Struct`].
///
/// Accessors are only described, never invoked, while iterating.
pub struct MemberIter<'a> {
    owner: &'a dyn Struct,
    index: usize,
}

impl<'a> MemberIter<'a> {
    /// Creates an iterator positioned at the first member.
    #[inline]
    pub fn new(owner: &'a dyn Struct) -> Self {
        Self { owner, index: 0 }
    }
}

impl<'a> Iterator for MemberIter<'a> {
    type Item = Member<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        let accessor = self.owner.accessor_at(index)?;
        self.index += 1;
        Some(Member {
            owner: self.owner,
            index,
            accessor,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.owner.accessor_len().saturating_sub(self.index);
        (len, Some(len))
    }
}

impl ExactSizeIterator for MemberIter<'_> {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::AccessError;
    use alloc::string::String;
    use alloc::vec::Vec;
    use alloc::vec;

    #[derive(Reflect)]
    struct Pair<T> {
        left: T,
        #[reflect(rename = "getRight")]
        right: Option<T>,
    }

    #[derive(Reflect)]
    struct Marker;

    #[derive(Reflect)]
    #[reflect(opaque)]
    struct Handle {
        _raw: u64,
    }

    #[derive(Reflect)]
    struct Roster {
        names: Vec<String>,
        #[reflect(skip)]
        _dirty: bool,
    }

    #[test]
    fn generic_struct_members() {
        let pair = Pair {
            left: 1_i32,
            right: None,
        };
        let value = pair.reflect_ref().as_struct().unwrap();

        let names: Vec<_> = value.members().map(|m| m.name()).collect();
        assert_eq!(names, ["left", "getRight"]);
        assert_eq!(value.index_of("getRight"), Some(1));
        assert!(value.member("right").is_none());

        let right = value.member("getRight").unwrap();
        assert!(right.declared_type().is_optional());
        assert!(right.invoke().unwrap().reflect_ref().is_null());

        assert_eq!(<Pair<i32> as TypePath>::type_ident(), "Pair");
        assert!(<Pair<i32> as TypePath>::type_path().ends_with("Pair<i32>"));
    }

    #[test]
    fn enumeration_is_restartable() {
        let roster = Roster {
            names: vec![String::from("a")],
            _dirty: false,
        };
        let value = roster.reflect_ref().as_struct().unwrap();
        assert_eq!(value.members().len(), 1);
        assert_eq!(value.members().count(), value.members().count());
        assert!(value.members().next().unwrap().declared_type().is_list());
    }

    #[test]
    fn out_of_range_invoke() {
        let roster = Roster {
            names: vec![],
            _dirty: true,
        };
        let value = roster.reflect_ref().as_struct().unwrap();
        assert!(value.accessor_at(1).is_none());
        assert!(matches!(
            value.invoke(1),
            Err(AccessError::OutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn unit_and_forced_opaque() {
        assert_eq!(Marker.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(Handle { _raw: 7 }.reflect_kind(), ReflectKind::Opaque);
        assert!(!<Handle as Typed>::type_info().is_struct());
        assert_eq!(Marker::module_path(), Some(module_path!()));
    }
}

use core::any::TypeId;
use core::fmt;

use crate::info::TypePath;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected value.
///
/// Obtained via [`Reflect::reflect_kind`] or [`ReflectRef::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Primitive,
    Struct,
    List,
    Opaque,
    Null,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => f.pad("Primitive"),
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Opaque => f.pad("Opaque"),
            Self::Null => f.pad("Null"),
        }
    }
}

// -----------------------------------------------------------------------------
// PrimitiveKind

/// The leaf value types: integers, floats, booleans and text.
///
/// `char` is counted as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Str,
}

impl PrimitiveKind {
    /// Returns `true` for the signed and unsigned integer kinds.
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::I128
                | Self::Isize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::U128
                | Self::Usize
        )
    }

    /// Returns `true` for `f32` and `f64`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns `true` for `char` and string-like types.
    #[inline]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Char | Self::Str)
    }
}

// -----------------------------------------------------------------------------
// TypeKind

/// The shape of a type as seen by the reflection system.
///
/// `List` and `Optional` carry their inner type lazily, as a function
/// pointer, so that `TypeInfo` stays `Copy` and recursive types are fine.
#[derive(Debug, Clone, Copy)]
pub enum TypeKind {
    /// A leaf value rendered as text.
    Primitive(PrimitiveKind),
    /// A value with named members, see [`Struct`](crate::ops::Struct).
    Struct,
    /// An ordered sequence, see [`List`](crate::ops::List).
    List { item: fn() -> TypeInfo },
    /// A nullable wrapper such as `Option<T>`.
    Optional { some: fn() -> TypeInfo },
    /// A value the reflection system cannot look into.
    Opaque,
    /// A type-erased container whose real type is only known at runtime,
    /// such as `Box<dyn Reflect>`.
    Dynamic,
}

// -----------------------------------------------------------------------------
// Type

/// The identity and names of a type.
#[derive(Debug, Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
    name: &'static str,
    ident: &'static str,
    module_path: Option<&'static str>,
}

impl Type {
    /// Collects the identity of `T`.
    #[inline]
    pub fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path(),
            name: T::type_name(),
            ident: T::type_ident(),
            module_path: T::module_path(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// See [`TypePath::module_path`].
    #[inline]
    pub const fn module_path(&self) -> Option<&'static str> {
        self.module_path
    }

    /// Returns `true` if this is exactly the type `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path)
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for a reflected type.
///
/// A `TypeInfo` is a small `Copy` value: the type's [`Type`] identity
/// plus its [`TypeKind`]. Equality compares type identity only.
///
/// # Obtain
///
/// - [`Typed::type_info`] when the type is known statically.
/// - [`DynamicTyped::reflect_type_info`] from a `&dyn Reflect`.
/// - [`Reflect::represented_type_info`] for the type a value *currently*
///   holds, looking through `Option` and `Box<dyn Reflect>`.
/// - [`Accessor::declared_type`] for the declared type of a struct member.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{PrimitiveKind, TypeKind, Typed};
///
/// let info = <Option<u32> as Typed>::type_info();
/// let TypeKind::Optional { some } = info.kind() else { unreachable!() };
///
/// assert!(matches!(some().kind(), TypeKind::Primitive(PrimitiveKind::U32)));
/// assert_eq!(info.resolve().type_ident(), "u32");
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
/// [`Reflect::represented_type_info`]: crate::Reflect::represented_type_info
/// [`Accessor::declared_type`]: crate::ops::Accessor::declared_type
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    ty: Type,
    kind: TypeKind,
}

impl TypeInfo {
    /// Creates the info of `T` with the given kind.
    #[inline]
    pub fn new<T: TypePath + ?Sized>(kind: TypeKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the underlying [`Type`] metadata.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeKind`].
    #[inline]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns the [`TypeId`].
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty.id()
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub const fn type_ident(&self) -> &'static str {
        self.ty.ident()
    }

    /// Returns `true` if this is exactly the type `T`.
    #[inline]
    pub fn type_is<T: ?Sized + 'static>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Peels `Optional` layers and returns the innermost type.
    ///
    /// Other kinds are returned unchanged.
    pub fn resolve(&self) -> TypeInfo {
        let mut info = *self;
        while let TypeKind::Optional { some } = info.kind {
            info = some();
        }
        info
    }

    /// Returns the primitive kind, if this is a primitive type.
    #[inline]
    pub const fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self.kind {
            TypeKind::Primitive(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns `true` for [`TypeKind::Struct`].
    #[inline]
    pub const fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct)
    }

    /// Returns `true` for [`TypeKind::List`].
    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self.kind, TypeKind::List { .. })
    }

    /// Returns `true` for [`TypeKind::Optional`].
    #[inline]
    pub const fn is_optional(&self) -> bool {
        matches!(self.kind, TypeKind::Optional { .. })
    }
}

impl PartialEq for TypeInfo {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty
    }
}

impl Eq for TypeInfo {}

// -----------------------------------------------------------------------------
// Tests

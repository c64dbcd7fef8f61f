// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// Provide a stable alternative to [`core::any::type_name`] for
/// non-generic types, plus the short identifier used to name document
/// nodes after a value's runtime type.
///
/// # Methods
///
/// - [`type_path`]: The unique identifier of the type.
/// - [`type_name`]: Type name without module path, may be duplicated.
/// - [`type_ident`]: The shortest type name, without module path and generics.
/// - [`module_path`]: Optional module path.
///
/// These names never start with `::`.
///
/// # Implementation
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements it:
///
/// ```
/// use vc_reflect::{derive::Reflect, info::TypePath};
///
/// #[derive(Reflect)]
/// struct Person {
///     age: u32,
/// }
///
/// assert_eq!(Person::type_ident(), "Person");
/// assert!(Person::type_path().ends_with("::Person"));
///
/// #[derive(Reflect)]
/// #[reflect(type_path = "hr::staff::Employee")]
/// struct Employee {
///     id: u64,
/// }
///
/// assert_eq!(Employee::type_path(), "hr::staff::Employee");
/// assert_eq!(Employee::type_ident(), "Employee");
/// assert_eq!(Employee::module_path(), Some("hr::staff"));
/// ```
///
/// Manual implementations are short for non-generic types:
///
/// ```
/// use vc_reflect::info::TypePath;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::foo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
///     fn type_ident() -> &'static str { "Foo" }
///     fn module_path() -> Option<&'static str> { Some("my_crate::foo") }
/// }
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Returns the fully qualified path of the underlying type.
    ///
    /// ```
    /// # use vc_reflect::info::TypePath;
    /// assert_eq!(<String as TypePath>::type_path(), "alloc::string::String");
    /// ```
    fn type_path() -> &'static str;

    /// Returns the type name without its module path.
    ///
    /// ```
    /// # use vc_reflect::info::TypePath;
    /// assert_eq!(<String as TypePath>::type_name(), "String");
    /// ```
    fn type_name() -> &'static str;

    /// Returns the name of the type without its module path or generics.
    ///
    /// ```
    /// # use vc_reflect::info::TypePath;
    /// assert_eq!(<Vec<u8> as TypePath>::type_ident(), "Vec");
    /// ```
    fn type_ident() -> &'static str;

    /// Returns the path to the module the type is in, if any.
    #[inline]
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`].
///
/// Auto implemented for every [`TypePath`] type, so a `&dyn Reflect`
/// reports the names of the concrete value behind it.
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// Tests

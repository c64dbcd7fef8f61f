use core::any::TypeId;

use vc_reflect::info::{TypeInfo, TypeKind, Typed};

use super::AttributeRegistry;

// -----------------------------------------------------------------------------
// TypeClassifier

/// Answers the questions a marshal asks about types.
///
/// All queries are pure: the classifier only borrows the
/// [`AttributeRegistry`] and never mutates it.
///
/// # Examples
///
/// ```
/// use vc_markup::{AttributeRegistry, TypeClassifier};
/// use vc_reflect::info::Typed;
///
/// let registry = AttributeRegistry::new();
/// let classifier = TypeClassifier::new(&registry);
///
/// assert!(classifier.is_primitive(&<i64 as Typed>::type_info()));
/// assert!(classifier.is_primitive(&<Option<String> as Typed>::type_info()));
/// assert!(!classifier.is_primitive(&<Vec<u8> as Typed>::type_info()));
/// assert!(classifier.is_sequence(&<Vec<u8> as Typed>::type_info()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TypeClassifier<'r> {
    registry: &'r AttributeRegistry,
}

impl<'r> TypeClassifier<'r> {
    #[inline]
    pub const fn new(registry: &'r AttributeRegistry) -> Self {
        Self { registry }
    }

    #[inline]
    pub const fn registry(&self) -> &'r AttributeRegistry {
        self.registry
    }

    /// Returns `true` for integers, floats, booleans and text.
    ///
    /// Optional wrappers are looked through: `Option<u8>` is primitive.
    /// Type-erased containers (`Box<dyn Reflect>`) are not, since their
    /// content is only known at runtime.
    pub fn is_primitive(&self, info: &TypeInfo) -> bool {
        matches!(info.resolve().kind(), TypeKind::Primitive(_))
    }

    /// See [`is_primitive`](Self::is_primitive).
    #[inline]
    pub fn is_primitive_type<T: Typed>(&self) -> bool {
        self.is_primitive(&T::type_info())
    }

    /// Returns `true` for ordered collections.
    pub fn is_sequence(&self, info: &TypeInfo) -> bool {
        info.resolve().is_list()
    }

    /// Returns `true` if `name` renders as an attribute of the type.
    #[inline]
    pub fn is_attribute(&self, type_id: TypeId, name: &str) -> bool {
        self.registry.is_attribute(type_id, name)
    }

    /// Returns `true` if the type has attribute registrations at all.
    #[inline]
    pub fn has_attributes(&self, type_id: TypeId) -> bool {
        self.registry.has_attributes(type_id)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeClassifier;
    use crate::AttributeRegistry;
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;
    use vc_reflect::Reflect;

    #[test]
    fn primitive_set() {
        let registry = AttributeRegistry::new();
        let c = TypeClassifier::new(&registry);

        assert!(c.is_primitive_type::<i8>());
        assert!(c.is_primitive_type::<u16>());
        assert!(c.is_primitive_type::<i32>());
        assert!(c.is_primitive_type::<u64>());
        assert!(c.is_primitive_type::<f32>());
        assert!(c.is_primitive_type::<f64>());
        assert!(c.is_primitive_type::<bool>());
        assert!(c.is_primitive_type::<char>());
        assert!(c.is_primitive_type::<String>());
        assert!(c.is_primitive_type::<&'static str>());
        assert!(c.is_primitive_type::<Cow<'static, str>>());
        assert!(c.is_primitive_type::<Option<Option<u8>>>());

        assert!(!c.is_primitive_type::<()>());
        assert!(!c.is_primitive_type::<Vec<String>>());
        assert!(!c.is_primitive_type::<Box<dyn Reflect>>());
    }

    #[test]
    fn attribute_lookup_goes_to_registry() {
        let mut registry = AttributeRegistry::new();
        registry.register::<u8>("x");
        let c = TypeClassifier::new(&registry);

        assert!(c.is_attribute(core::any::TypeId::of::<u8>(), "X"));
        assert!(c.has_attributes(core::any::TypeId::of::<u8>()));
        assert!(!c.has_attributes(core::any::TypeId::of::<u16>()));
    }
}

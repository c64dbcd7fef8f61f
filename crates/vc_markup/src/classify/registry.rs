use alloc::borrow::Cow;
use alloc::string::String;
use core::any::TypeId;
use core::fmt;

use vc_utils::TypeIdMap;
use vc_utils::hash::HashSet;

// -----------------------------------------------------------------------------
// AttributeRegistry

/// Maps a type to the member names rendered as document attributes for
/// values of exactly that type.
///
/// Names are matched case-insensitively: they are lowercased on
/// registration and on lookup. Matching is by exact [`TypeId`]; a type that
/// wraps or embeds a registered type inherits nothing.
///
/// The registry is built before marshalling and only read afterwards; a
/// [`Marshaller`](crate::Marshaller) borrows it immutably.
///
/// # Examples
///
/// ```
/// use vc_markup::AttributeRegistry;
///
/// struct Person;
///
/// let mut registry = AttributeRegistry::new();
/// registry.register::<Person>("Age");
///
/// assert!(registry.is_attribute_of::<Person>("age"));
/// assert!(registry.is_attribute_of::<Person>("AGE"));
/// assert!(!registry.is_attribute_of::<Person>("name"));
/// assert!(!registry.is_attribute_of::<u32>("age"));
/// ```
#[derive(Default, Clone)]
pub struct AttributeRegistry {
    types: TypeIdMap<HashSet<String>>,
}

impl AttributeRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            types: TypeIdMap::new(),
        }
    }

    /// Registers `name` as an attribute of `T`.
    ///
    /// Returns `false` if it was already registered, which leaves the
    /// registry unchanged.
    #[inline]
    pub fn register<T: ?Sized + 'static>(&mut self, name: &str) -> bool {
        self.register_by_id(TypeId::of::<T>(), name)
    }

    /// Registers `name` as an attribute of the type with id `type_id`.
    pub fn register_by_id(&mut self, type_id: TypeId, name: &str) -> bool {
        let names = self.types.get_or_insert(type_id, HashSet::default);
        let name = normalize(name);
        if names.contains(&*name) {
            return false;
        }
        names.insert(name.into_owned())
    }

    /// Returns `true` if `name` is registered for the type with id `type_id`.
    ///
    /// A type without any registration answers `false`.
    pub fn is_attribute(&self, type_id: TypeId, name: &str) -> bool {
        match self.types.get(&type_id) {
            Some(names) => names.contains(&*normalize(name)),
            None => false,
        }
    }

    /// See [`is_attribute`](Self::is_attribute).
    #[inline]
    pub fn is_attribute_of<T: ?Sized + 'static>(&self, name: &str) -> bool {
        self.is_attribute(TypeId::of::<T>(), name)
    }

    /// Returns `true` if any name is registered for the type.
    #[inline]
    pub fn has_attributes(&self, type_id: TypeId) -> bool {
        self.types
            .get(&type_id)
            .is_some_and(|names| !names.is_empty())
    }

    /// Returns the names registered for the type, in no particular order.
    pub fn attributes_of(&self, type_id: TypeId) -> impl Iterator<Item = &str> {
        self.types
            .get(&type_id)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    /// Returns the number of types with registrations.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if nothing has been registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl fmt::Debug for AttributeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.types.iter())
            .finish()
    }
}

/// Lowercases a member name, borrowing when it already is.
pub(crate) fn normalize(name: &str) -> Cow<'_, str> {
    if name.chars().any(char::is_uppercase) {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{AttributeRegistry, normalize};
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::any::TypeId;

    struct Person;
    struct Employee;

    #[test]
    fn registration_is_idempotent() {
        let mut registry = AttributeRegistry::new();
        assert!(registry.register::<Person>("age"));
        assert!(!registry.register::<Person>("age"));
        assert!(!registry.register::<Person>("Age"));

        let names: Vec<_> = registry.attributes_of(TypeId::of::<Person>()).collect();
        assert_eq!(names, ["age"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn exact_type_matching() {
        let mut registry = AttributeRegistry::new();
        registry.register::<Person>("id");

        assert!(registry.is_attribute_of::<Person>("id"));
        assert!(!registry.is_attribute_of::<Employee>("id"));
        assert!(!registry.is_attribute_of::<Option<Person>>("id"));
        assert!(!registry.has_attributes(TypeId::of::<Employee>()));
    }

    #[test]
    fn empty_registry() {
        let registry = AttributeRegistry::default();
        assert!(registry.is_empty());
        assert!(!registry.is_attribute_of::<String>("len"));
        assert_eq!(registry.attributes_of(TypeId::of::<String>()).count(), 0);
    }

    #[test]
    fn normalize_borrows_lowercase() {
        assert!(matches!(normalize("name"), alloc::borrow::Cow::Borrowed("name")));
        assert_eq!(normalize("FirstName"), "firstname");
    }
}

//! Node names derived from accessor and type names.

use alloc::borrow::Cow;

use crate::ElementNaming;

/// Strips the getter `prefix` from an accessor name.
///
/// The name is returned unchanged when it does not start with `prefix`, or
/// when nothing would be left.
///
/// ```
/// use vc_markup::marshal::naming::logical_name;
///
/// assert_eq!(logical_name("getName", "get"), "Name");
/// assert_eq!(logical_name("get_age", "get_"), "age");
/// assert_eq!(logical_name("name", "get_"), "name");
/// assert_eq!(logical_name("get", "get"), "get");
/// ```
pub fn logical_name<'a>(accessor: &'a str, prefix: &str) -> &'a str {
    match accessor.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => rest,
        _ => accessor,
    }
}

/// Lowercases a member name, as done for primitive members and attribute
/// lookups.
///
/// ```
/// use vc_markup::marshal::naming::normalize;
///
/// assert_eq!(normalize("FirstName"), "firstname");
/// ```
#[inline]
pub fn normalize(name: &str) -> Cow<'_, str> {
    crate::classify::normalize(name)
}

/// Names the node of a sequence element of type `ident`.
///
/// ```
/// use vc_markup::ElementNaming;
/// use vc_markup::marshal::naming::element_name;
///
/// assert_eq!(element_name("Person", ElementNaming::Lowercase), "person");
/// assert_eq!(element_name("Person", ElementNaming::TypeName), "Person");
/// ```
pub fn element_name(ident: &'static str, naming: ElementNaming) -> Cow<'static, str> {
    match naming {
        ElementNaming::Lowercase => normalize(ident),
        ElementNaming::TypeName => Cow::Borrowed(ident),
    }
}

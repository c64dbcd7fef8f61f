use core::fmt;

use crate::ops::{List, Struct};

/// Formats a [`Struct`] as `TypeName { member: value, .. }`.
///
/// Members whose accessor fails print as `<error>`.
pub fn struct_debug(value: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    struct Invoked<'a>(crate::ops::Member<'a>);

    impl fmt::Debug for Invoked<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.0.invoke() {
                Ok(value) => value.reflect_debug(f),
                Err(_) => f.write_str("<error>"),
            }
        }
    }

    let mut debug = f.debug_struct(value.reflect_type_ident());
    for member in value.members() {
        debug.field(member.name(), &Invoked(member));
    }
    debug.finish()
}

/// Formats a [`List`] as `[a, b, ..]`.
pub fn list_debug(value: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(value.iter()).finish()
}

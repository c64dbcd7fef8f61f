use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::info::PrimitiveKind;

// -----------------------------------------------------------------------------
// Primitive

/// A leaf value with no further structure: an integer, a float,
/// a boolean or text.
///
/// Implemented for all integer and float widths, `bool`, `char`, `String`,
/// `&'static str` and `Cow<'static, str>`.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, info::PrimitiveKind};
///
/// let value = 29_u32;
/// let p = value.reflect_ref().as_primitive().unwrap();
///
/// assert_eq!(p.primitive_kind(), PrimitiveKind::U32);
/// assert_eq!(p.to_text(), "29");
/// ```
pub trait Primitive: Reflect {
    /// Returns the kind of this primitive.
    fn primitive_kind(&self) -> PrimitiveKind;

    /// Writes the text form of the value.
    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Returns the text form of the value.
    fn to_text(&self) -> String {
        let mut text = String::new();
        // Writing into a `String` never fails.
        let _ = self.write_text(&mut text);
        text
    }
}

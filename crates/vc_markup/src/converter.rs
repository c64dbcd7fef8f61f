use alloc::boxed::Box;

use vc_reflect::Reflect;
use vc_reflect::info::TypeInfo;

use crate::{HierarchicalReader, HierarchicalWriter, MarshalError, Marshaller};

// -----------------------------------------------------------------------------
// Converter

/// The seam through which a serialization driver hands values to a
/// marshalling strategy.
///
/// A driver asks [`can_convert`] before [`marshal`]. [`unmarshal`] is the
/// read direction.
///
/// [`can_convert`]: Converter::can_convert
/// [`marshal`]: Converter::marshal
/// [`unmarshal`]: Converter::unmarshal
pub trait Converter {
    /// Returns `true` if this converter handles values of the type.
    fn can_convert(&self, ty: &TypeInfo) -> bool;

    /// Emits `value` into `writer`, relative to the node currently open.
    fn marshal(
        &self,
        value: &dyn Reflect,
        writer: &mut dyn HierarchicalWriter,
    ) -> Result<(), MarshalError>;

    /// Reconstructs a value from `reader`, or `None` if unsupported.
    fn unmarshal(&self, reader: &mut dyn HierarchicalReader) -> Option<Box<dyn Reflect>>;
}

/// The marshaller accepts every type and does not read documents back:
/// [`unmarshal`](Converter::unmarshal) returns `None` without touching the
/// reader.
impl Converter for Marshaller<'_> {
    #[inline]
    fn can_convert(&self, _ty: &TypeInfo) -> bool {
        true
    }

    #[inline]
    fn marshal(
        &self,
        value: &dyn Reflect,
        writer: &mut dyn HierarchicalWriter,
    ) -> Result<(), MarshalError> {
        Marshaller::marshal(self, value, writer)
    }

    #[inline]
    fn unmarshal(&self, _reader: &mut dyn HierarchicalReader) -> Option<Box<dyn Reflect>> {
        None
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Converter;
    use crate::{AttributeRegistry, EventWriter, HierarchicalReader, Marshaller, WriterEvent};
    use alloc::string::String;
    use alloc::vec::Vec;
    use vc_reflect::info::Typed;

    /// Counts every call, so a no-op read path is observable.
    #[derive(Default)]
    struct CountingReader {
        calls: core::cell::Cell<usize>,
        moves: usize,
    }

    impl HierarchicalReader for CountingReader {
        fn node_name(&self) -> &str {
            self.calls.set(self.calls.get() + 1);
            "root"
        }
        fn attribute(&self, _name: &str) -> Option<&str> {
            self.calls.set(self.calls.get() + 1);
            None
        }
        fn text(&self) -> Option<&str> {
            self.calls.set(self.calls.get() + 1);
            None
        }
        fn has_more_children(&self) -> bool {
            self.calls.set(self.calls.get() + 1);
            false
        }
        fn move_down(&mut self) -> bool {
            self.moves += 1;
            false
        }
        fn move_up(&mut self) -> bool {
            self.moves += 1;
            false
        }
    }

    #[test]
    fn accepts_every_type() {
        let registry = AttributeRegistry::new();
        let converter: &dyn Converter = &Marshaller::new(&registry);

        assert!(converter.can_convert(&<u8 as Typed>::type_info()));
        assert!(converter.can_convert(&<Vec<String> as Typed>::type_info()));
        assert!(converter.can_convert(&<() as Typed>::type_info()));
    }

    #[test]
    fn unmarshal_is_a_no_op() {
        let registry = AttributeRegistry::new();
        let converter: &dyn Converter = &Marshaller::new(&registry);

        let mut reader = CountingReader::default();
        assert!(converter.unmarshal(&mut reader).is_none());
        assert_eq!(reader.calls.get(), 0);
        assert_eq!(reader.moves, 0);
    }

    #[test]
    fn marshal_through_the_seam() {
        let registry = AttributeRegistry::new();
        let converter: &dyn Converter = &Marshaller::new(&registry);

        let mut writer = EventWriter::new();
        converter.marshal(&7_u8, &mut writer).unwrap();
        assert_eq!(writer.events(), [WriterEvent::SetText("7".into())]);
    }
}

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

// -----------------------------------------------------------------------------
// HierarchicalWriter

/// The sink a [`Marshaller`](crate::Marshaller) emits into.
///
/// Calls arrive in document order and must be applied in that order.
/// Nesting depth is arbitrary. The marshaller only ever:
///
/// - adds attributes to the node that is open when it visits a value, and
///   before any child of that node is started;
/// - sets text on a node that has no children;
/// - closes every node it opens.
///
/// Byte-level formats live behind this trait; see the `vc_document` crate
/// for an in-memory tree and XML/JSON renderers.
///
/// # Examples
///
/// ```
/// use vc_markup::HierarchicalWriter;
///
/// #[derive(Default)]
/// struct Depth { current: usize, max: usize }
///
/// impl HierarchicalWriter for Depth {
///     fn start_node(&mut self, _name: &str) {
///         self.current += 1;
///         self.max = self.max.max(self.current);
///     }
///     fn end_node(&mut self) { self.current -= 1; }
///     fn add_attribute(&mut self, _name: &str, _text: &str) {}
///     fn set_text(&mut self, _text: &str) {}
/// }
/// ```
pub trait HierarchicalWriter {
    /// Opens a child node of the current node.
    fn start_node(&mut self, name: &str);

    /// Closes the current node.
    fn end_node(&mut self);

    /// Adds an attribute to the current node.
    fn add_attribute(&mut self, name: &str, text: &str);

    /// Sets the text of the current node.
    fn set_text(&mut self, text: &str);
}

impl<W: HierarchicalWriter + ?Sized> HierarchicalWriter for &mut W {
    #[inline]
    fn start_node(&mut self, name: &str) {
        (**self).start_node(name);
    }

    #[inline]
    fn end_node(&mut self) {
        (**self).end_node();
    }

    #[inline]
    fn add_attribute(&mut self, name: &str, text: &str) {
        (**self).add_attribute(name, text);
    }

    #[inline]
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }
}

// -----------------------------------------------------------------------------
// WriterEvent

/// One call received by a [`HierarchicalWriter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WriterEvent {
    StartNode(String),
    EndNode,
    AddAttribute(String, String),
    SetText(String),
}

impl WriterEvent {
    /// Replays the event on `writer`.
    pub fn apply(&self, writer: &mut dyn HierarchicalWriter) {
        match self {
            Self::StartNode(name) => writer.start_node(name),
            Self::EndNode => writer.end_node(),
            Self::AddAttribute(name, text) => writer.add_attribute(name, text),
            Self::SetText(text) => writer.set_text(text),
        }
    }
}

impl fmt::Display for WriterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartNode(name) => write!(f, "StartNode({name:?})"),
            Self::EndNode => f.write_str("EndNode"),
            Self::AddAttribute(name, text) => write!(f, "AddAttribute({name:?}, {text:?})"),
            Self::SetText(text) => write!(f, "SetText({text:?})"),
        }
    }
}

// -----------------------------------------------------------------------------
// EventWriter

/// A [`HierarchicalWriter`] that records every call, in order.
///
/// # Examples
///
/// ```
/// use vc_markup::{EventWriter, HierarchicalWriter, WriterEvent};
///
/// let mut writer = EventWriter::new();
/// writer.start_node("name");
/// writer.set_text("wubp");
/// writer.end_node();
///
/// assert_eq!(writer.events(), [
///     WriterEvent::StartNode("name".into()),
///     WriterEvent::SetText("wubp".into()),
///     WriterEvent::EndNode,
/// ]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventWriter {
    events: Vec<WriterEvent>,
}

impl EventWriter {
    #[inline]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events.
    #[inline]
    pub fn events(&self) -> &[WriterEvent] {
        &self.events
    }

    /// Consumes the writer, returning the recorded events.
    #[inline]
    pub fn into_events(self) -> Vec<WriterEvent> {
        self.events
    }

    /// Forgets all recorded events.
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Replays the recorded events on another writer.
    pub fn replay(&self, writer: &mut dyn HierarchicalWriter) {
        for event in &self.events {
            event.apply(writer);
        }
    }
}

impl HierarchicalWriter for EventWriter {
    fn start_node(&mut self, name: &str) {
        self.events.push(WriterEvent::StartNode(name.into()));
    }

    fn end_node(&mut self) {
        self.events.push(WriterEvent::EndNode);
    }

    fn add_attribute(&mut self, name: &str, text: &str) {
        self.events
            .push(WriterEvent::AddAttribute(name.into(), text.into()));
    }

    fn set_text(&mut self, text: &str) {
        self.events.push(WriterEvent::SetText(text.into()));
    }
}

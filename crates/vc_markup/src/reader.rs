// -----------------------------------------------------------------------------
// HierarchicalReader

/// A cursor over a hierarchical document, the read-side counterpart of
/// [`HierarchicalWriter`](crate::HierarchicalWriter).
///
/// The cursor starts on the root node. [`move_down`] enters the next unread
/// child of the current node, [`move_up`] returns to its parent.
///
/// [`Converter::unmarshal`](crate::Converter::unmarshal) receives one, but
/// the marshaller never reconstructs values from it.
///
/// [`move_down`]: HierarchicalReader::move_down
/// [`move_up`]: HierarchicalReader::move_up
pub trait HierarchicalReader {
    /// Returns the name of the current node.
    fn node_name(&self) -> &str;

    /// Returns the value of the named attribute of the current node.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Returns the text of the current node, if it is a text node.
    fn text(&self) -> Option<&str>;

    /// Returns `true` if the current node has unread children.
    fn has_more_children(&self) -> bool;

    /// Moves to the next unread child. Returns `false`, without moving, when
    /// there is none.
    fn move_down(&mut self) -> bool;

    /// Moves to the parent. Returns `false`, without moving, on the root.
    fn move_up(&mut self) -> bool;
}

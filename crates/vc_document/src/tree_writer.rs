use alloc::string::String;
use alloc::vec::Vec;

use vc_markup::HierarchicalWriter;

use crate::{Node, WriterError};

// -----------------------------------------------------------------------------
// TreeWriter

/// A [`HierarchicalWriter`] that builds a [`Node`] tree in memory.
///
/// The writer starts with its root node open; [`finish`] returns it once
/// every other node has been closed. A call that would break the tree
/// (text next to children, an attribute after content, ...) is dropped
/// and logged, and the first such error is returned by [`finish`].
///
/// # Examples
///
/// ```
/// use vc_document::TreeWriter;
/// use vc_markup::HierarchicalWriter;
///
/// let mut writer = TreeWriter::new("person");
/// writer.add_attribute("age", "29");
/// writer.start_node("name");
/// writer.set_text("wubp");
/// writer.end_node();
///
/// let root = writer.finish().unwrap();
/// assert_eq!(root.attribute("age"), Some("29"));
/// assert_eq!(root.child("name").unwrap().text(), Some("wubp"));
/// ```
///
/// [`finish`]: TreeWriter::finish
#[derive(Debug, Clone)]
pub struct TreeWriter {
    // The root is `stack[0]`; the open node is the last one.
    stack: Vec<Node>,
    error: Option<WriterError>,
}

impl TreeWriter {
    /// Creates a writer whose root node `root` is open.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            stack: alloc::vec![Node::new(root)],
            error: None,
        }
    }

    /// Returns the number of nodes open below the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Returns the first error encountered so far.
    #[inline]
    pub fn error(&self) -> Option<&WriterError> {
        self.error.as_ref()
    }

    /// Returns the root node.
    ///
    /// # Errors
    ///
    /// The first [`WriterError`] met while writing, or
    /// [`WriterError::Unclosed`] if nodes other than the root are still open.
    pub fn finish(mut self) -> Result<Node, WriterError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if self.stack.len() > 1 {
            return Err(WriterError::Unclosed {
                open: self.stack.len() - 1,
            });
        }
        match self.stack.pop() {
            Some(root) => Ok(root),
            None => Err(WriterError::UnbalancedEnd),
        }
    }

    fn current(&mut self) -> &mut Node {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn fail(&mut self, err: WriterError) {
        log::warn!("tree writer: {err}, call dropped");
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

impl HierarchicalWriter for TreeWriter {
    fn start_node(&mut self, name: &str) {
        let current = self.current();
        if current.text().is_some() {
            let err = WriterError::ChildInTextNode {
                node: current.name().into(),
                child: name.into(),
            };
            self.fail(err);
        }
        // Pushed anyway so the matching `end_node` stays balanced.
        self.stack.push(Node::new(name));
    }

    fn end_node(&mut self) {
        if self.stack.len() <= 1 {
            self.fail(WriterError::UnbalancedEnd);
            return;
        }
        let Some(node) = self.stack.pop() else {
            return;
        };
        // A refused child was already reported by `start_node`.
        if let Err(err) = self.current().push_child(node)
            && self.error.is_none()
        {
            self.fail(err);
        }
    }

    fn add_attribute(&mut self, name: &str, text: &str) {
        if let Err(err) = self.current().add_attribute(name, text) {
            self.fail(err);
        }
    }

    fn set_text(&mut self, text: &str) {
        if let Err(err) = self.current().set_text(text) {
            self.fail(err);
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TreeWriter;
    use crate::WriterError;
    use vc_markup::HierarchicalWriter;

    #[test]
    fn nested_nodes() {
        let mut writer = TreeWriter::new("root");
        writer.start_node("a");
        writer.start_node("b");
        writer.set_text("1");
        assert_eq!(writer.depth(), 2);
        writer.end_node();
        writer.start_node("c");
        writer.end_node();
        writer.end_node();

        let root = writer.finish().unwrap();
        let a = root.child("a").unwrap();
        assert_eq!(a.children().len(), 2);
        assert_eq!(a.child("b").unwrap().text(), Some("1"));
        assert!(a.child("c").unwrap().is_empty());
    }

    #[test]
    fn unclosed_nodes() {
        let mut writer = TreeWriter::new("root");
        writer.start_node("a");
        assert_eq!(writer.finish(), Err(WriterError::Unclosed { open: 1 }));
    }

    #[test]
    fn unbalanced_end() {
        let mut writer = TreeWriter::new("root");
        writer.end_node();
        assert_eq!(writer.error(), Some(&WriterError::UnbalancedEnd));
        assert_eq!(writer.finish(), Err(WriterError::UnbalancedEnd));
    }

    #[test]
    fn first_error_wins() {
        let mut writer = TreeWriter::new("root");
        writer.set_text("t");
        writer.start_node("child");
        writer.end_node();
        writer.add_attribute("late", "1");

        assert!(matches!(
            writer.finish(),
            Err(WriterError::ChildInTextNode { .. })
        ));
    }
}

use alloc::vec::Vec;

use vc_markup::HierarchicalReader;

use crate::Node;

// -----------------------------------------------------------------------------
// TreeReader

/// A [`HierarchicalReader`] over an in-memory [`Node`] tree.
///
/// # Examples
///
/// ```
/// use vc_document::{Node, TreeReader};
/// use vc_markup::HierarchicalReader;
///
/// let mut root = Node::new("person");
/// root.add_attribute("age", "29").unwrap();
/// root.push_child(Node::with_text("name", "wubp")).unwrap();
///
/// let mut reader = TreeReader::new(&root);
/// assert_eq!(reader.attribute("age"), Some("29"));
///
/// assert!(reader.move_down());
/// assert_eq!(reader.node_name(), "name");
/// assert_eq!(reader.text(), Some("wubp"));
/// assert!(reader.move_up());
/// assert!(!reader.has_more_children());
/// ```
#[derive(Debug, Clone)]
pub struct TreeReader<'a> {
    // The open path from the root; each entry keeps the index of the next
    // unread child.
    path: Vec<(&'a Node, usize)>,
}

impl<'a> TreeReader<'a> {
    /// Creates a reader positioned on `root`.
    #[inline]
    pub fn new(root: &'a Node) -> Self {
        Self {
            path: alloc::vec![(root, 0)],
        }
    }

    /// Returns the node under the cursor.
    #[inline]
    pub fn node(&self) -> &'a Node {
        self.path[self.path.len() - 1].0
    }

    /// Returns the depth of the cursor; the root is at depth zero.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }
}

impl HierarchicalReader for TreeReader<'_> {
    #[inline]
    fn node_name(&self) -> &str {
        self.node().name()
    }

    #[inline]
    fn attribute(&self, name: &str) -> Option<&str> {
        self.node().attribute(name)
    }

    #[inline]
    fn text(&self) -> Option<&str> {
        self.node().text()
    }

    fn has_more_children(&self) -> bool {
        let (node, next) = self.path[self.path.len() - 1];
        next < node.children().len()
    }

    fn move_down(&mut self) -> bool {
        let last = self.path.len() - 1;
        let (node, next) = self.path[last];
        let Some(child) = node.children().get(next) else {
            return false;
        };
        self.path[last].1 += 1;
        self.path.push((child, 0));
        true
    }

    fn move_up(&mut self) -> bool {
        if self.path.len() <= 1 {
            return false;
        }
        self.path.pop();
        true
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TreeReader;
    use crate::Node;
    use alloc::string::String;
    use alloc::vec::Vec;
    use vc_markup::HierarchicalReader;

    fn names(reader: &mut TreeReader) -> Vec<String> {
        let mut out = Vec::new();
        while reader.move_down() {
            out.push(reader.node_name().into());
            out.extend(names(reader));
            reader.move_up();
        }
        out
    }

    #[test]
    fn depth_first_walk() {
        let mut a = Node::new("a");
        a.push_child(Node::with_text("b", "1")).unwrap();
        a.push_child(Node::new("c")).unwrap();
        let mut root = Node::new("root");
        root.push_child(a).unwrap();
        root.push_child(Node::new("d")).unwrap();

        let mut reader = TreeReader::new(&root);
        assert_eq!(names(&mut reader), ["a", "b", "c", "d"]);
        assert_eq!(reader.depth(), 0);
        assert!(!reader.move_up());
        assert!(!reader.move_down());
    }
}

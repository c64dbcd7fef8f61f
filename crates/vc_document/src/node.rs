use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::WriterError;

// -----------------------------------------------------------------------------
// NodeContent

/// What a [`Node`] holds besides its attributes: nothing, text, or
/// children, never text and children together.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeContent {
    #[default]
    Empty,
    Text(String),
    Children(Vec<Node>),
}

// -----------------------------------------------------------------------------
// Node

/// One element of a document tree.
///
/// # Examples
///
/// ```
/// use vc_document::Node;
///
/// let mut person = Node::new("person");
/// person.add_attribute("age", "29").unwrap();
/// person.push_child(Node::with_text("name", "wubp")).unwrap();
///
/// assert_eq!(person.attribute("age"), Some("29"));
/// assert_eq!(person.child("name").and_then(Node::text), Some("wubp"));
///
/// // A node with children cannot also hold text.
/// assert!(person.set_text("x").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    name: String,
    #[serde(default)]
    attributes: Vec<(String, String)>,
    #[serde(default)]
    content: NodeContent,
}

impl Node {
    /// Creates an empty node.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: NodeContent::Empty,
        }
    }

    /// Creates a text node.
    #[inline]
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: NodeContent::Text(text.into()),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes in the order they were added.
    #[inline]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[inline]
    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    /// Returns the text, if this is a text node.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the children; empty for text and empty nodes.
    #[inline]
    pub fn children(&self) -> &[Node] {
        match &self.content {
            NodeContent::Children(children) => children,
            _ => &[],
        }
    }

    /// Returns the first child named `name`.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|child| child.name == name)
    }

    /// Returns `true` if the node has neither text nor children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.content, NodeContent::Empty)
    }

    /// Adds an attribute. Attributes must precede content and be unique.
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), WriterError> {
        let name = name.into();
        if !self.is_empty() {
            return Err(WriterError::AttributeAfterContent {
                node: self.name.clone(),
                name,
            });
        }
        if self.attribute(&name).is_some() {
            return Err(WriterError::DuplicateAttribute {
                node: self.name.clone(),
                name,
            });
        }
        self.attributes.push((name, text.into()));
        Ok(())
    }

    /// Sets the text, replacing any previous text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), WriterError> {
        if let NodeContent::Children(_) = self.content {
            return Err(WriterError::TextInContainer {
                node: self.name.clone(),
            });
        }
        self.content = NodeContent::Text(text.into());
        Ok(())
    }

    /// Appends a child.
    pub fn push_child(&mut self, child: Node) -> Result<(), WriterError> {
        match &mut self.content {
            NodeContent::Children(children) => children.push(child),
            NodeContent::Empty => self.content = NodeContent::Children(alloc::vec![child]),
            NodeContent::Text(_) => {
                return Err(WriterError::ChildInTextNode {
                    node: self.name.clone(),
                    child: child.name,
                });
            }
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Node, NodeContent};
    use crate::WriterError;

    #[test]
    fn leaf_or_container() {
        let mut text = Node::with_text("a", "1");
        assert!(matches!(
            text.push_child(Node::new("b")),
            Err(WriterError::ChildInTextNode { .. })
        ));
        assert_eq!(text.text(), Some("1"));

        let mut container = Node::new("c");
        container.push_child(Node::new("d")).unwrap();
        assert!(matches!(
            container.set_text("x"),
            Err(WriterError::TextInContainer { .. })
        ));
        assert_eq!(container.children().len(), 1);
    }

    #[test]
    fn attribute_rules() {
        let mut node = Node::new("n");
        node.add_attribute("id", "1").unwrap();
        assert!(matches!(
            node.add_attribute("id", "2"),
            Err(WriterError::DuplicateAttribute { .. })
        ));
        node.set_text("t").unwrap();
        assert!(matches!(
            node.add_attribute("late", "3"),
            Err(WriterError::AttributeAfterContent { .. })
        ));
        assert_eq!(node.attributes().len(), 1);
    }

    #[test]
    fn ron_round_trip() {
        let mut node = Node::new("person");
        node.add_attribute("age", "29").unwrap();
        node.push_child(Node::with_text("name", "wubp")).unwrap();
        node.push_child(Node::new("home")).unwrap();

        let text = ron::to_string(&node).unwrap();
        let back: Node = ron::from_str(&text).unwrap();
        assert_eq!(back, node);
        assert_eq!(back.child("home").map(Node::content), Some(&NodeContent::Empty));
    }
}

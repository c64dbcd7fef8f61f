use alloc::string::String;
use alloc::vec::Vec;

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

use crate::{EmptyElement, JsonFormat, Node, NodeContent};

/// Renders `node` as JSON.
///
/// Shapes:
/// - a text node without attributes becomes a string;
/// - an empty node becomes `{}`, or `""` with [`EmptyElement::Expanded`];
/// - attributes become `"@name"` keys, text beside attributes a `"$"` key;
/// - children become keys in first-seen order, repeated names an array.
///
/// Non-compact formats use the format's indent and always break lines
/// with `\n`.
///
/// # Errors
///
/// Only if the serializer reports one, which a well-formed [`Node`]
/// never causes.
///
/// # Examples
///
/// ```
/// use vc_document::{Format, JsonFormat, Node, render_json};
///
/// let mut person = Node::new("person");
/// person.add_attribute("age", "29").unwrap();
/// person.push_child(Node::with_text("name", "wubp")).unwrap();
/// person.push_child(Node::with_text("tag", "a")).unwrap();
/// person.push_child(Node::with_text("tag", "b")).unwrap();
///
/// let json = render_json(&person, &JsonFormat::default()).unwrap();
/// assert_eq!(json, r#"{"@age":"29","name":"wubp","tag":["a","b"]}"#);
///
/// let json = render_json(&person, &JsonFormat::new(Format::compact())).unwrap();
/// assert!(json.starts_with(r#"{"person":{"@age""#));
/// ```
pub fn render_json(node: &Node, format: &JsonFormat) -> serde_json::Result<String> {
    let mut out = Vec::new();
    if format.format.is_compact() {
        write_json(node, format, CompactFormatter, &mut out)?;
    } else {
        let pretty = PrettyFormatter::with_indent(format.format.indent.as_bytes());
        write_json(node, format, pretty, &mut out)?;
    }
    String::from_utf8(out).map_err(serde_json::Error::custom)
}

fn write_json<F: Formatter>(
    node: &Node,
    format: &JsonFormat,
    formatter: F,
    out: &mut Vec<u8>,
) -> serde_json::Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(out, formatter);
    let value = NodeValue {
        node,
        empty: format.format.empty_element,
    };
    if format.drop_root {
        value.serialize(&mut ser)
    } else {
        Root(value).serialize(&mut ser)
    }
}

// -----------------------------------------------------------------------------
// Views

struct Root<'a>(NodeValue<'a>);

impl Serialize for Root<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0.node.name(), &self.0)?;
        map.end()
    }
}

#[derive(Clone, Copy)]
struct NodeValue<'a> {
    node: &'a Node,
    empty: EmptyElement,
}

impl Serialize for NodeValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let attributes = self.node.attributes();
        match self.node.content() {
            NodeContent::Empty if attributes.is_empty() => match self.empty {
                EmptyElement::Compact => serializer.serialize_map(Some(0))?.end(),
                EmptyElement::Expanded => serializer.serialize_str(""),
            },
            NodeContent::Text(text) if attributes.is_empty() => serializer.serialize_str(text),
            content => {
                let groups = match content {
                    NodeContent::Children(children) => group(children),
                    _ => Vec::new(),
                };
                let text = match content {
                    NodeContent::Text(text) => Some(text),
                    _ => None,
                };

                let len = attributes.len() + groups.len() + usize::from(text.is_some());
                let mut map = serializer.serialize_map(Some(len))?;
                for (name, value) in attributes {
                    map.serialize_key(&Prefixed(name))?;
                    map.serialize_value(value)?;
                }
                if let Some(text) = text {
                    map.serialize_entry("$", text)?;
                }
                for (name, nodes) in groups {
                    let group = Group {
                        nodes,
                        empty: self.empty,
                    };
                    map.serialize_entry(name, &group)?;
                }
                map.end()
            }
        }
    }
}

struct Prefixed<'a>(&'a str);

impl Serialize for Prefixed<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("@{}", self.0))
    }
}

struct Group<'a> {
    nodes: Vec<&'a Node>,
    empty: EmptyElement,
}

impl<'a> Serialize for Group<'a> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = |node: &&'a Node| NodeValue {
            node: *node,
            empty: self.empty,
        };
        match self.nodes.as_slice() {
            [node] => value(node).serialize(serializer),
            nodes => {
                let mut seq = serializer.serialize_seq(Some(nodes.len()))?;
                for node in nodes {
                    seq.serialize_element(&value(node))?;
                }
                seq.end()
            }
        }
    }
}

/// Groups children by name, in order of first appearance.
fn group(children: &[Node]) -> Vec<(&str, Vec<&Node>)> {
    let mut groups: Vec<(&str, Vec<&Node>)> = Vec::new();
    for child in children {
        match groups.iter_mut().find(|(name, _)| *name == child.name()) {
            Some((_, nodes)) => nodes.push(child),
            None => groups.push((child.name(), alloc::vec![child])),
        }
    }
    groups
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::render_json;
    use crate::{EmptyElement, Format, JsonFormat, Node};

    fn list() -> Node {
        let mut root = Node::new("list");
        let mut first = Node::new("person");
        first.add_attribute("age", "29").unwrap();
        first.push_child(Node::with_text("name", "wubp")).unwrap();
        root.push_child(first).unwrap();
        root.push_child(Node::new("person")).unwrap();
        root.push_child(Node::with_text("note", "x")).unwrap();
        root
    }

    #[test]
    fn repeated_children_become_arrays() {
        let json = render_json(&list(), &JsonFormat::new(Format::compact())).unwrap();
        assert_eq!(
            json,
            r#"{"list":{"person":[{"@age":"29","name":"wubp"},{}],"note":"x"}}"#
        );
    }

    #[test]
    fn expanded_empty_nodes() {
        let format = JsonFormat::default()
            .with_format(Format::compact().with_empty_element(EmptyElement::Expanded));
        let json = render_json(&list(), &format).unwrap();
        assert_eq!(
            json,
            r#"{"person":[{"@age":"29","name":"wubp"},""],"note":"x"}"#
        );
    }

    #[test]
    fn text_beside_attributes() {
        let mut node = Node::new("price");
        node.add_attribute("currency", "EUR").unwrap();
        node.set_text("12").unwrap();
        let json = render_json(&node, &JsonFormat::default()).unwrap();
        assert_eq!(json, r#"{"@currency":"EUR","$":"12"}"#);
    }

    #[test]
    fn pretty_output_parses_back() {
        let json = render_json(&list(), &JsonFormat::new(Format::pretty())).unwrap();
        assert!(json.contains("\n  \"list\": {"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["list"]["person"][0]["name"], "wubp");
        assert_eq!(value["list"]["note"], "x");
    }
}

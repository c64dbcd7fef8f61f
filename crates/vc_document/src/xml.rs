use alloc::string::String;
use core::fmt::{self, Write};

use crate::{EmptyElement, Format, Node, NodeContent};

/// Renders `node` as XML.
///
/// # Examples
///
/// ```
/// use vc_document::{Format, Node, render_xml};
///
/// let mut person = Node::new("person");
/// person.add_attribute("age", "29").unwrap();
/// person.push_child(Node::with_text("name", "wubp")).unwrap();
/// person.push_child(Node::new("home")).unwrap();
///
/// assert_eq!(
///     render_xml(&person, &Format::compact()),
///     r#"<person age="29"><name>wubp</name><home/></person>"#,
/// );
/// assert_eq!(
///     render_xml(&person, &Format::pretty()),
///     "<person age=\"29\">\n  <name>wubp</name>\n  <home/>\n</person>\n",
/// );
/// ```
pub fn render_xml(node: &Node, format: &Format) -> String {
    let mut out = String::new();
    // Writing into a `String` never fails.
    let _ = write_xml(node, format, &mut out);
    out
}

/// Writes `node` as XML into `out`.
pub fn write_xml(node: &Node, format: &Format, out: &mut dyn Write) -> fmt::Result {
    write_node(node, format, 0, out)
}

fn write_node(node: &Node, format: &Format, depth: usize, out: &mut dyn Write) -> fmt::Result {
    write_indent(format, depth, out)?;
    write!(out, "<{}", node.name())?;
    for (name, value) in node.attributes() {
        write!(out, " {name}=\"")?;
        escape(value, true, out)?;
        out.write_char('"')?;
    }

    match node.content() {
        NodeContent::Empty => match format.empty_element {
            EmptyElement::Compact => out.write_str("/>")?,
            EmptyElement::Expanded => write!(out, "></{}>", node.name())?,
        },
        NodeContent::Text(text) => {
            out.write_char('>')?;
            escape(text, false, out)?;
            write!(out, "</{}>", node.name())?;
        }
        NodeContent::Children(children) => {
            out.write_char('>')?;
            out.write_str(&format.newline)?;
            for child in children {
                write_node(child, format, depth + 1, out)?;
            }
            write_indent(format, depth, out)?;
            write!(out, "</{}>", node.name())?;
        }
    }
    out.write_str(&format.newline)
}

fn write_indent(format: &Format, depth: usize, out: &mut dyn Write) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(&format.indent)?;
    }
    Ok(())
}

fn escape(text: &str, quotes: bool, out: &mut dyn Write) -> fmt::Result {
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        let replacement = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' if quotes => "&quot;",
            '\'' if quotes => "&apos;",
            _ => continue,
        };
        out.write_str(&text[start..index])?;
        out.write_str(replacement)?;
        start = index + ch.len_utf8();
    }
    out.write_str(&text[start..])
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::render_xml;
    use crate::{EmptyElement, Format, Node};

    #[test]
    fn escaping() {
        let mut node = Node::new("q");
        node.add_attribute("t", "'x' & \"y\"").unwrap();
        node.set_text("a < b & c > \"d\"").unwrap();
        assert_eq!(
            render_xml(&node, &Format::compact()),
            "<q t=\"&apos;x&apos; &amp; &quot;y&quot;\">a &lt; b &amp; c &gt; \"d\"</q>"
        );
    }

    #[test]
    fn expanded_empty_elements() {
        let mut root = Node::new("list");
        root.push_child(Node::new("person")).unwrap();
        let format = Format::compact().with_empty_element(EmptyElement::Expanded);
        assert_eq!(render_xml(&root, &format), "<list><person></person></list>");
    }

    #[test]
    fn empty_text_is_not_empty_element() {
        let node = Node::with_text("label", "");
        assert_eq!(render_xml(&node, &Format::compact()), "<label></label>");
    }
}

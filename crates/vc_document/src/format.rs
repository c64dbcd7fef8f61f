use alloc::borrow::Cow;

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// EmptyElement

/// How a node with neither text nor children is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmptyElement {
    /// XML `<a/>`, JSON `{}`.
    #[default]
    Compact,
    /// XML `<a></a>`, JSON `""`.
    Expanded,
}

// -----------------------------------------------------------------------------
// Format

/// Layout of rendered output.
///
/// An explicit value handed to each render call; nothing is global.
///
/// # Examples
///
/// ```
/// use vc_document::{EmptyElement, Format};
///
/// let compact = Format::compact();
/// assert!(compact.indent.is_empty() && compact.newline.is_empty());
/// assert_eq!(compact.empty_element, EmptyElement::Compact);
///
/// let pretty = Format::pretty().with_indent("    ");
/// assert_eq!(pretty.indent, "    ");
/// assert_eq!(pretty.newline, "\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Format {
    /// Written once per nesting level before each line.
    pub indent: Cow<'static, str>,
    /// Written after each line.
    pub newline: Cow<'static, str>,
    pub empty_element: EmptyElement,
}

impl Format {
    /// No indentation, no line breaks, compact empty elements.
    pub const fn compact() -> Self {
        Self {
            indent: Cow::Borrowed(""),
            newline: Cow::Borrowed(""),
            empty_element: EmptyElement::Compact,
        }
    }

    /// Two-space indentation, `\n` line breaks, compact empty elements.
    pub const fn pretty() -> Self {
        Self {
            indent: Cow::Borrowed("  "),
            newline: Cow::Borrowed("\n"),
            empty_element: EmptyElement::Compact,
        }
    }

    #[inline]
    pub fn with_indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.indent = indent.into();
        self
    }

    #[inline]
    pub fn with_newline(mut self, newline: impl Into<Cow<'static, str>>) -> Self {
        self.newline = newline.into();
        self
    }

    #[inline]
    pub fn with_empty_element(mut self, empty_element: EmptyElement) -> Self {
        self.empty_element = empty_element;
        self
    }

    /// Returns `true` if output has no line structure.
    #[inline]
    pub fn is_compact(&self) -> bool {
        self.indent.is_empty() && self.newline.is_empty()
    }
}

impl Default for Format {
    #[inline]
    fn default() -> Self {
        Self::compact()
    }
}

// -----------------------------------------------------------------------------
// JsonFormat

/// Layout of JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonFormat {
    pub format: Format,
    /// Render the root node's content without the `{ "root": ... }` wrapper.
    pub drop_root: bool,
}

impl JsonFormat {
    #[inline]
    pub fn new(format: Format) -> Self {
        Self {
            format,
            drop_root: false,
        }
    }

    #[inline]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[inline]
    pub fn with_drop_root(mut self, drop_root: bool) -> Self {
        self.drop_root = drop_root;
        self
    }
}

impl Default for JsonFormat {
    /// Compact output with the root dropped.
    #[inline]
    fn default() -> Self {
        Self {
            format: Format::compact(),
            drop_root: true,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{EmptyElement, Format, JsonFormat};

    #[test]
    fn ron_round_trip() {
        let format = JsonFormat::new(Format::pretty().with_empty_element(EmptyElement::Expanded));
        let text = ron::to_string(&format).unwrap();
        let back: JsonFormat = ron::from_str(&text).unwrap();
        assert_eq!(back, format);
    }

    #[test]
    fn json_defaults() {
        let format: JsonFormat = serde_json::from_str(r#"{ "format": { "indent": "\t" } }"#).unwrap();
        assert_eq!(format.format.indent, "\t");
        assert_eq!(format.format.newline, "");
        assert!(format.drop_root);
        assert!(!format.format.is_compact());
    }
}

use alloc::borrow::Cow;

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// ElementNaming

/// How a sequence element's node name is derived from its runtime type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementNaming {
    /// The unqualified type name, lowercased: `Person` -> `person`.
    #[default]
    Lowercase,
    /// The unqualified type name as written: `Person`.
    TypeName,
}

// -----------------------------------------------------------------------------
// MarshalConfig

/// Settings of a [`Marshaller`](crate::Marshaller).
///
/// Missing fields take their default when deserialized.
///
/// # Examples
///
/// ```
/// use vc_markup::{ElementNaming, MarshalConfig};
///
/// let config = MarshalConfig::default()
///     .with_getter_prefix("get")
///     .with_element_naming(ElementNaming::TypeName)
///     .with_max_depth(16);
///
/// assert_eq!(config.getter_prefix, "get");
/// assert_eq!(config.max_depth, 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarshalConfig {
    /// Prefix stripped from accessor names to form logical member names.
    ///
    /// Only stripped when the accessor name starts with it and something
    /// is left afterwards. Empty disables stripping.
    pub getter_prefix: Cow<'static, str>,
    /// Naming of sequence element nodes.
    pub element_naming: ElementNaming,
    /// The maximum number of nested nodes the marshaller opens.
    pub max_depth: usize,
}

impl MarshalConfig {
    /// The default [`max_depth`](Self::max_depth).
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// The default [`getter_prefix`](Self::getter_prefix).
    pub const DEFAULT_GETTER_PREFIX: &'static str = "get_";

    #[inline]
    pub fn with_getter_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.getter_prefix = prefix.into();
        self
    }

    #[inline]
    pub fn with_element_naming(mut self, naming: ElementNaming) -> Self {
        self.element_naming = naming;
        self
    }

    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for MarshalConfig {
    fn default() -> Self {
        Self {
            getter_prefix: Cow::Borrowed(Self::DEFAULT_GETTER_PREFIX),
            element_naming: ElementNaming::Lowercase,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ElementNaming, MarshalConfig};

    #[test]
    fn ron_round_trip() {
        let config = MarshalConfig::default()
            .with_getter_prefix("get")
            .with_element_naming(ElementNaming::TypeName);
        let text = ron::to_string(&config).unwrap();
        let back: MarshalConfig = ron::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn json_missing_fields_use_defaults() {
        let config: MarshalConfig = serde_json::from_str(r#"{ "max_depth": 4 }"#).unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.getter_prefix, MarshalConfig::DEFAULT_GETTER_PREFIX);
        assert_eq!(config.element_naming, ElementNaming::Lowercase);
    }
}

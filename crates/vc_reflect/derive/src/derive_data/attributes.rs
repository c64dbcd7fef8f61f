use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes applied at the type level.
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "a::b::C")]`
    pub type_path: Option<LitStr>,
    /// `#[reflect(opaque)]`
    pub opaque: bool,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if this.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path`"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    validate_type_path(&lit)?;
                    this.type_path = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("opaque") {
                    this.opaque = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown type attribute, expected `type_path` or `opaque`"))
                }
            })?;
        }

        Ok(this)
    }
}

fn validate_type_path(lit: &LitStr) -> syn::Result<()> {
    let value = lit.value();
    if value.is_empty() || value.starts_with("::") || value.split("::").any(str::is_empty) {
        return Err(syn::Error::new(
            lit.span(),
            "`type_path` must be a non-empty path like `a::b::C` without a leading `::`",
        ));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes applied to a named field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(skip)]`
    pub skip: bool,
    /// `#[reflect(rename = "...")]`
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "`rename` must not be empty"));
                    }
                    this.rename = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error("unknown field attribute, expected `skip` or `rename`"))
                }
            })?;
        }

        Ok(this)
    }
}

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Path, Type};

use super::{FieldAttributes, TypeAttributes};

// -----------------------------------------------------------------------------
// StructField

/// A named field that gets an accessor.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The accessor name, the field name unless renamed.
    pub name: String,
}

// -----------------------------------------------------------------------------
// ReflectKind

pub(crate) enum ReflectKind<'a> {
    Struct(Vec<StructField<'a>>),
    Opaque,
}

// -----------------------------------------------------------------------------
// ReflectDerive

pub(crate) struct ReflectDerive<'a> {
    vc_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    kind: ReflectKind<'a>,
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`Reflect` cannot be derived for enums",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`Reflect` cannot be derived for unions",
                ));
            }
        };

        let kind = match &data.fields {
            Fields::Unit => ReflectKind::Opaque,
            _ if attrs.opaque => ReflectKind::Opaque,
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new_spanned(
                    fields,
                    "`Reflect` needs named fields, use `#[reflect(opaque)]` for tuple structs",
                ));
            }
            Fields::Named(fields) => {
                let mut members = Vec::with_capacity(fields.named.len());
                for field in &fields.named {
                    let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                    if field_attrs.skip {
                        continue;
                    }
                    let Some(ident) = field.ident.as_ref() else {
                        continue;
                    };
                    let name = match field_attrs.rename {
                        Some(lit) => lit.value(),
                        None => ident.unraw().to_string(),
                    };
                    // Attribute lookups ignore case, so `Code` and `code` collide.
                    let lower = name.to_lowercase();
                    if let Some(other) = members
                        .iter()
                        .find(|m: &&StructField| m.name.to_lowercase() == lower)
                    {
                        return Err(syn::Error::new_spanned(
                            field,
                            format!("accessor name `{name}` collides with `{}`", other.name),
                        ));
                    }
                    members.push(StructField {
                        ident,
                        ty: &field.ty,
                        name,
                    });
                }
                ReflectKind::Struct(members)
            }
        };

        Ok(Self {
            vc_reflect_path: crate::path::vc_reflect(),
            attrs,
            ident: &input.ident,
            generics: &input.generics,
            kind,
        })
    }

    #[inline]
    pub fn vc_reflect_path(&self) -> &Path {
        &self.vc_reflect_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn kind(&self) -> &ReflectKind<'a> {
        &self.kind
    }

    #[inline]
    pub fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// Generate the `type_path` expression.
    pub fn type_path_expr(&self) -> TokenStream {
        if let Some(lit) = &self.attrs.type_path {
            return lit.to_token_stream();
        }
        if self.is_generic() {
            return quote! { ::core::any::type_name::<Self>() };
        }
        let ident = self.ident.unraw().to_string();
        quote! { ::core::concat!(::core::module_path!(), "::", #ident) }
    }

    /// Generate the `type_ident` expression.
    pub fn type_ident_expr(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => {
                let value = lit.value();
                let ident = value.rsplit("::").next().unwrap_or(&value).to_owned();
                quote! { #ident }
            }
            None => {
                let ident = self.ident.unraw().to_string();
                quote! { #ident }
            }
        }
    }

    /// Generate the `module_path` expression, an `Option<&'static str>`.
    pub fn module_path_expr(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => match lit.value().rsplit_once("::") {
                Some((module, _)) => quote! { ::core::option::Option::Some(#module) },
                None => quote! { ::core::option::Option::None },
            },
            None => quote! { ::core::option::Option::Some(::core::module_path!()) },
        }
    }

    /// Split generics for an impl block, adding `Reflect + Typed` bounds
    /// to every type parameter.
    pub fn split_generics(&self) -> (TokenStream, TokenStream, TokenStream) {
        let reflect_ = crate::path::reflect_(&self.vc_reflect_path);
        let typed_ = crate::path::typed_(&self.vc_reflect_path);

        let mut generics = self.generics.clone();
        if self.is_generic() {
            let where_clause = generics.make_where_clause();
            for param in self.generics.type_params() {
                let ident = &param.ident;
                where_clause
                    .predicates
                    .push(syn::parse_quote! { #ident: #reflect_ + #typed_ });
            }
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        (
            impl_generics.to_token_stream(),
            ty_generics.to_token_stream(),
            where_clause.to_token_stream(),
        )
    }
}

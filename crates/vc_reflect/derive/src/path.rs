//! Paths into `vc_reflect` used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `vc_reflect` crate.
///
/// 1. For crates that depend on `vc_reflect`, `::vc_reflect` is returned.
/// 2. For crates that depend on `vc_marshal`, `::vc_marshal::reflect` is returned.
/// 3. For other situations, `::vc_reflect` is returned, but this may be incorrect.
///
/// Reading the caller's manifest is not cheap, so the path is obtained once
/// per derive and passed around.
pub(crate) fn vc_reflect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_reflect"))
}

#[inline(always)]
pub(crate) fn reflect_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::Reflect }
}

#[inline(always)]
pub(crate) fn type_path_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::TypePath }
}

#[inline(always)]
pub(crate) fn typed_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn type_kind_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::info::TypeKind }
}

#[inline(always)]
pub(crate) fn reflect_ref_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::ReflectRef }
}

#[inline(always)]
pub(crate) fn struct_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::Struct }
}

#[inline(always)]
pub(crate) fn accessor_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::Accessor }
}

#[inline(always)]
pub(crate) fn member_value_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::MemberValue }
}

#[inline(always)]
pub(crate) fn access_error_(vc_reflect_path: &syn::Path) -> TokenStream {
    quote! { #vc_reflect_path::ops::AccessError }
}

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectDerive, ReflectKind};

/// Generate implementation codes for `Reflect`
pub(crate) fn impl_trait_reflect(info: &ReflectDerive) -> TokenStream {
    let vc_reflect_path = info.vc_reflect_path();
    let reflect_ = crate::path::reflect_(vc_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vc_reflect_path);

    let reflect_ref = match info.kind() {
        ReflectKind::Struct(_) => quote!(#reflect_ref_::Struct(self)),
        ReflectKind::Opaque => quote!(#reflect_ref_::Opaque(self)),
    };

    let real_ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref
            }
        }
    }
}

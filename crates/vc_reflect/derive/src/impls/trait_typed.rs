use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectDerive, ReflectKind};

/// Generate implementation codes for `Typed`
pub(crate) fn impl_trait_typed(info: &ReflectDerive) -> TokenStream {
    let vc_reflect_path = info.vc_reflect_path();
    let typed_ = crate::path::typed_(vc_reflect_path);
    let type_info_ = crate::path::type_info_(vc_reflect_path);
    let type_kind_ = crate::path::type_kind_(vc_reflect_path);

    let kind = match info.kind() {
        ReflectKind::Struct(_) => quote!(#type_kind_::Struct),
        ReflectKind::Opaque => quote!(#type_kind_::Opaque),
    };

    let real_ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #typed_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn type_info() -> #type_info_ {
                #type_info_::new::<Self>(#kind)
            }
        }
    }
}

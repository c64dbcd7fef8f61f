use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectDerive;

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(info: &ReflectDerive) -> TokenStream {
    let trait_type_path_ = crate::path::type_path_(info.vc_reflect_path());

    let real_ident = info.ident();
    let type_path = info.type_path_expr();
    let type_ident = info.type_ident_expr();
    let module_path = info.module_path_expr();

    // Generic types also use the ident as their short name.
    let type_name = &type_ident;

    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #trait_type_path_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                #module_path
            }
        }
    }
}

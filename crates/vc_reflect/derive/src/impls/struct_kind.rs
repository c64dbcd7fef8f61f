use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectDerive, StructField};

/// Generate implementation codes for `Struct`: one accessor per field,
/// in declaration order.
pub(crate) fn impl_trait_struct(info: &ReflectDerive, fields: &[StructField]) -> TokenStream {
    let vc_reflect_path = info.vc_reflect_path();
    let struct_ = crate::path::struct_(vc_reflect_path);
    let accessor_ = crate::path::accessor_(vc_reflect_path);
    let member_value_ = crate::path::member_value_(vc_reflect_path);
    let access_error_ = crate::path::access_error_(vc_reflect_path);
    let type_path_ = crate::path::type_path_(vc_reflect_path);

    let field_len = fields.len();
    let indices: Vec<usize> = (0..field_len).collect();
    let names = fields.iter().map(|field| field.name.as_str());
    let types = fields.iter().map(|field| field.ty);
    let idents = fields.iter().map(|field| field.ident);

    let accessor_arms = quote! {
        #( #indices => ::core::option::Option::Some(#accessor_::new::<#types>(#names)), )*
    };
    let invoke_arms = quote! {
        #( #indices => ::core::result::Result::Ok(#member_value_::Borrowed(&self.#idents)), )*
    };

    let real_ident = info.ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn accessor_len(&self) -> usize {
                #field_len
            }

            fn accessor_at(&self, index: usize) -> ::core::option::Option<#accessor_> {
                match index {
                    #accessor_arms
                    _ => ::core::option::Option::None,
                }
            }

            fn invoke(
                &self,
                index: usize,
            ) -> ::core::result::Result<#member_value_<'_>, #access_error_> {
                match index {
                    #invoke_arms
                    _ => ::core::result::Result::Err(#access_error_::OutOfRange {
                        type_path: <Self as #type_path_>::type_path(),
                        index,
                    }),
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Modules

mod struct_kind;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use struct_kind::impl_trait_struct;
use trait_reflect::impl_trait_reflect;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;

use crate::derive_data::{ReflectDerive, ReflectKind};

/// Implement full reflect for the derived type.
pub(crate) fn impl_reflect_derive(info: &ReflectDerive) -> TokenStream {
    let type_path_trait_tokens = impl_trait_type_path(info);
    let typed_trait_tokens = impl_trait_typed(info);
    let reflect_trait_tokens = impl_trait_reflect(info);

    let struct_trait_tokens = match info.kind() {
        ReflectKind::Struct(fields) => impl_trait_struct(info, fields),
        ReflectKind::Opaque => TokenStream::new(),
    };

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens

        #struct_trait_tokens
    }
}

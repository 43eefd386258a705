use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

#[proc_macro_derive(AsEnvelope)]
pub fn derive_as_envelope(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let operation = name.to_string().to_lowercase();
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::result_envelope::AsEnvelope for #name #ty_generics #where_clause {
            fn into_envelope(self) -> ::result_envelope::DataEnvelope<Self> {
                ::result_envelope::ResultEnvelope::builder()
                    .status(::result_envelope::Status::Ok)
                    .operation(#operation)
                    .build()
                    .with_data(self)
            }
        }
    };

    TokenStream::from(expanded)
}

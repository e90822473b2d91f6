use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let qbrecord = &self.qbrecord;
        let model_ident = &self.model.ident;

        let arms = self.model.fields.iter().map(|field| {
            let ident = &field.ident;
            let name = &field.name;

            quote! {
                #name => #qbrecord::Primitive::to_value(&self.#ident),
            }
        });

        quote! {
            impl #qbrecord::Record for #model_ident {
                fn field_value(&self, name: &str) -> #qbrecord::Value {
                    match name {
                        #( #arms )*
                        _ => #qbrecord::Value::Null,
                    }
                }
            }
        }
    }
}

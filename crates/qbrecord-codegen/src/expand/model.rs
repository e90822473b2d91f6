use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let qbrecord = &self.qbrecord;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let load_fields = self.expand_load_fields();
        let assign_arms = self.expand_assign_arms();
        let required_arms = self.expand_required_arms();

        quote! {
            impl #qbrecord::Model for #model_ident {
                #model_schema

                fn load(mut row: #qbrecord::Row) -> #qbrecord::Result<Self> {
                    Ok(Self {
                        #load_fields
                    })
                }

                fn assign(&mut self, name: &str, value: #qbrecord::Value) -> #qbrecord::Result<()> {
                    match name {
                        #assign_arms
                        _ => {
                            return Err(#qbrecord::Error::unknown_field(
                                <Self as #qbrecord::Model>::schema().table_id(),
                                name,
                            ))
                        }
                    }

                    Ok(())
                }

                fn is_required(name: &str) -> bool {
                    match name {
                        #required_arms
                        _ => false,
                    }
                }
            }
        }
    }

    fn expand_required_arms(&self) -> TokenStream {
        let qbrecord = &self.qbrecord;

        self.model
            .fields
            .iter()
            .map(|field| {
                let name = &field.name;
                let ty = &field.ty;

                quote! {
                    #name => !<#ty as #qbrecord::Primitive>::NULLABLE,
                }
            })
            .collect()
    }

    fn expand_load_fields(&self) -> TokenStream {
        let qbrecord = &self.qbrecord;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let name = &field.name;

                quote! {
                    #ident: #qbrecord::load_field(&mut row, #name)?,
                }
            })
            .collect()
    }

    fn expand_assign_arms(&self) -> TokenStream {
        let qbrecord = &self.qbrecord;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let name = &field.name;

                quote! {
                    #name => self.#ident = #qbrecord::load_value(value, #name)?,
                }
            })
            .collect()
    }
}

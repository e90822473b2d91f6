use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Body of `Model::schema()`: a lazily built, shared table schema.
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let qbrecord = &self.qbrecord;
        let model_name = self.model.ident.to_string();
        let table = &self.model.table;

        let fields = self.model.fields.iter().map(|field| {
            let name = &field.name;
            let ty = &field.ty;
            let fid = util::fid(field.attrs.fid);

            let primary_key = field.is_key().then(|| quote!(.primary_key()));
            let read_only = field.attrs.read_only.then(|| quote!(.read_only()));

            quote! {
                .field(
                    #qbrecord::schema::Field::new(
                        #name,
                        #fid,
                        <#ty as #qbrecord::Primitive>::KIND,
                    )
                    #primary_key
                    #read_only
                )
            }
        });

        quote! {
            fn schema() -> &'static #qbrecord::Arc<#qbrecord::TableSchema> {
                static SCHEMA: #qbrecord::OnceLock<#qbrecord::Arc<#qbrecord::TableSchema>> =
                    #qbrecord::OnceLock::new();

                SCHEMA.get_or_init(|| {
                    #qbrecord::build_schema(
                        #model_name,
                        #qbrecord::TableSchema::builder(#table)
                            #( #fields )*
                    )
                })
            }
        }
    }
}

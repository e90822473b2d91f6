use super::{ErrorSet, Field, ModelAttr};

use std::collections::HashMap;

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields
    pub(crate) fields: Vec<Field>,

    /// Remote table id
    pub(crate) table: syn::LitStr,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields: Vec<Field> = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        let mut by_fid = HashMap::new();
        let mut has_key = false;

        for node in node.named.iter() {
            let field = match Field::from_ast(node) {
                Ok(field) => field,
                Err(err) => {
                    errs.push(err);
                    continue;
                }
            };

            if let Some(prev) = by_fid.insert(field.attrs.fid, field.ident.clone()) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!(
                        "duplicate FID {}; already used by `{}`",
                        field.attrs.fid, prev
                    ),
                ));
            }

            if let Some(attr) = &field.attrs.key {
                if has_key {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "model has more than one #[key] field",
                    ));
                }
                has_key = true;
            }

            fields.push(field);
        }

        let Some(table) = model_attr.table else {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "missing `#[table = \"<table id>\"]` attribute",
            ));
            return Err(errs.collect().unwrap_or_else(|| {
                syn::Error::new_spanned(&ast.ident, "invalid model")
            }));
        };

        // Edits and deletes address records by record id
        if !fields.iter().any(Field::is_record_id) {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "model needs a field with #[fid(3)] to hold the record id",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Model {
            ident: ast.ident.clone(),
            fields,
            table,
        })
    }
}

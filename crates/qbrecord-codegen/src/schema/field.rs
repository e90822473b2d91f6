use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Struct field identifier
    pub(crate) ident: syn::Ident,

    /// Name the field is addressed by in filters and rows
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    /// Value of `#[fid(N)]`
    pub(crate) fid: u32,

    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// True if the field is annotated with `#[read_only]`
    pub(crate) read_only: bool,
}

/// FID the service assigns to every table's record id column.
pub(crate) const RECORD_ID: u32 = 3;

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut fid = None;
        let mut has_fid_attr = false;
        let mut key = None;
        let mut read_only = false;

        for attr in &field.attrs {
            if attr.path().is_ident("fid") {
                if has_fid_attr {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[fid] attribute"));
                    continue;
                }
                has_fid_attr = true;

                match parse_fid(attr) {
                    Ok(value) => fid = Some(value),
                    Err(err) => errs.push(err),
                }
            } else if attr.path().is_ident("key") {
                if key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    key = Some(attr.clone());
                }
            } else if attr.path().is_ident("read_only") {
                if read_only {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[read_only] attribute",
                    ));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    read_only = true;
                }
            }
        }

        if !has_fid_attr {
            errs.push(syn::Error::new_spanned(
                ident,
                "missing #[fid(..)] attribute; every model field maps to a table field",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            attrs: FieldAttr {
                fid: fid.unwrap_or_default(),
                key,
                read_only,
            },
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
        })
    }

    pub(crate) fn is_key(&self) -> bool {
        self.attrs.key.is_some()
    }

    pub(crate) fn is_record_id(&self) -> bool {
        self.attrs.fid == RECORD_ID
    }
}

fn parse_fid(attr: &syn::Attribute) -> syn::Result<u32> {
    let lit: syn::LitInt = attr.parse_args()?;
    let fid: u32 = lit.base10_parse()?;

    if fid == 0 {
        return Err(syn::Error::new_spanned(lit, "FIDs start at 1"));
    }

    Ok(fid)
}

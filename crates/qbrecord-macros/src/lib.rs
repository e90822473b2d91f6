extern crate proc_macro;

use proc_macro::TokenStream;

/// Derive a record type mapped onto one remote table.
///
/// The struct carries `#[table = "<table id>"]` and every field carries
/// `#[fid(N)]`. One field may be marked `#[key]`; when none is, the field
/// with FID 3 is the primary key. Fields marked `#[read_only]` are never
/// written.
#[proc_macro_derive(Model, attributes(table, fid, key, read_only))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match qbrecord_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

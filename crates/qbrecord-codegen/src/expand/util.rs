use proc_macro2::{Literal, TokenStream};
use quote::ToTokens;

/// A FID as a `u32` literal.
pub(crate) fn fid(v: u32) -> TokenStream {
    Literal::u32_suffixed(v).into_token_stream()
}

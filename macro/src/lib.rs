#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Not an issue in a macro crate"
)]
//! Procedural macro for compile-time Amazon Resource Name (ARN) parsing.
mod core;
use proc_macro::TokenStream;
use self::core::arn_impl;

use syn::{LitStr, parse_macro_input};

/// Builds an `Arn` from a string literal checked at compile time.
///
/// Expands to the equivalent `Arn::builder()` calls, so the result is a plain
/// runtime value. A malformed literal or an unknown partition is reported at
/// the macro call site with the same message the runtime parser would give.
#[proc_macro]
pub fn arn(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    match arn_impl(&lit) {
        Ok(token_stream) => token_stream,
        Err(err) => err.to_compile_error(),
    }
    .into()
}

//! Procedural macros for `localized`.
//!
//! [`LocalizedKey`] derives `localized::LocalizedKeyProvider` for enums whose
//! variants name localisation keys. Keys are fixed when the enum is declared:
//! an explicit `#[localized(key = "...")]`, or the variant name adjusted by
//! the container's `rename_all` and `prefix` options. Empty and duplicate
//! keys are rejected at compile time.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `localized::LocalizedKeyProvider` on unit-only enums.
///
/// Container options, all optional:
/// - `#[localized(prefix = "MyStrings.")]` prepends text to derived keys.
/// - `#[localized(rename_all = "kebab-case")]` recases variant names.
/// - `#[localized(crate = "path")]` names the `localized` crate when renamed.
///
/// Variant option: `#[localized(key = "Exact.Key")]`, used verbatim.
#[proc_macro_derive(LocalizedKey, attributes(localized))]
pub fn derive_localized_key(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[cfg(test)]
mod tests;

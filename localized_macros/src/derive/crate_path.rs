//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[localized(crate = "...")]` attribute value into
//! the tokens that prefix `LocalizedKeyProvider` in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed container attribute.
///
/// Defaults to `::localized` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::localized }, |path| quote! { #path })
}

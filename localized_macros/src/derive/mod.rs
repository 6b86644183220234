//! Expansion of `#[derive(LocalizedKey)]`.
//!
//! Each unit variant maps to a fixed string. Keys are validated while
//! expanding, so an enum that compiles is guaranteed to map one-to-one onto
//! non-empty keys.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, Variant};

pub(crate) mod crate_path;
pub(crate) mod parse;
pub(crate) mod rename;

use parse::{ContainerAttrs, parse_container_attrs, parse_variant_attrs};

/// Key assigned to a single variant, with the span diagnostics point at.
struct VariantKey<'a> {
    ident: &'a Ident,
    key: String,
    span: Span,
}

/// Expands the derive for `input`, or returns every diagnostic found.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "LocalizedKey can only be derived for enums",
        ));
    };

    let container = parse_container_attrs(&input.attrs)?;
    let mut errors = Diagnostics::default();
    let mut keys: Vec<VariantKey<'_>> = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        match variant_key(&container, variant) {
            Ok(candidate) => {
                if let Some(existing) = keys.iter().find(|seen| seen.key == candidate.key) {
                    errors.push(syn::Error::new(
                        candidate.span,
                        format!(
                            "duplicate localized key `{}`, already used by `{}`",
                            candidate.key, existing.ident
                        ),
                    ));
                } else {
                    keys.push(candidate);
                }
            }
            Err(err) => errors.push(err),
        }
    }
    errors.finish()?;

    let krate = crate_path::resolve(container.crate_path.as_ref());
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let arms = keys.iter().map(|VariantKey { ident: variant, key, .. }| {
        quote! { Self::#variant => #key }
    });

    Ok(quote! {
        impl #impl_generics #krate::LocalizedKeyProvider for #ident #ty_generics #where_clause {
            fn localized_key(&self) -> &str {
                match *self {
                    #( #arms, )*
                }
            }
        }
    })
}

fn variant_key<'a>(container: &ContainerAttrs, variant: &'a Variant) -> syn::Result<VariantKey<'a>> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            &variant.fields,
            "LocalizedKey variants must not carry fields",
        ));
    }

    let attrs = parse_variant_attrs(&variant.attrs)?;
    let (key, span) = if let Some(explicit) = attrs.key {
        (explicit.value(), explicit.span())
    } else {
        (container.derive_key(&variant.ident.unraw()), variant.ident.span())
    };

    if key.is_empty() {
        return Err(syn::Error::new(span, "localized key must not be empty"));
    }

    Ok(VariantKey {
        ident: &variant.ident,
        key,
        span,
    })
}

/// Collects errors so one expansion reports every bad variant at once.
#[derive(Default)]
struct Diagnostics(Option<syn::Error>);

impl Diagnostics {
    fn push(&mut self, error: syn::Error) {
        if let Some(existing) = self.0.as_mut() {
            existing.combine(error);
        } else {
            self.0 = Some(error);
        }
    }

    fn finish(self) -> syn::Result<()> {
        self.0.map_or(Ok(()), Err)
    }
}

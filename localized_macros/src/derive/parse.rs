//! Parsing utilities for the `LocalizedKey` derive macro.

use syn::{Attribute, Ident, Lit, LitStr};

use super::rename::RenameRule;

/// Options read from `#[localized(...)]` on the enum itself.
#[derive(Default, Clone)]
pub(crate) struct ContainerAttrs {
    pub prefix: Option<String>,
    pub rename_all: Option<RenameRule>,
    pub crate_path: Option<syn::Path>,
}

impl ContainerAttrs {
    /// Builds the key for a variant without an explicit `key`.
    pub(crate) fn derive_key(&self, variant: &Ident) -> String {
        let name = variant.to_string();
        let cased = self
            .rename_all
            .map_or_else(|| name.clone(), |rule| rule.apply(&name));
        match &self.prefix {
            Some(prefix) => format!("{prefix}{cased}"),
            None => cased,
        }
    }
}

/// Options read from `#[localized(...)]` on a variant.
#[derive(Default, Clone)]
pub(crate) struct VariantAttrs {
    pub key: Option<LitStr>,
}

/// Iterate all `#[localized(...)]` attributes once and apply a callback.
fn parse_localized<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("localized")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown(meta: &syn::meta::ParseNestedMeta, expected: &str) -> syn::Error {
    let name = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("<path>"), ToString::to_string);
    meta.error(format!(
        "unknown localized attribute `{name}`, expected {expected}"
    ))
}

fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let lit = meta.value()?.parse::<Lit>()?;
    match lit {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(other.span(), format!("{key} must be a string"))),
    }
}

/// Extracts container options. Unknown keys are rejected so typos surface
/// instead of silently producing different keys.
pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    parse_localized(attrs, |meta| {
        if meta.path.is_ident("prefix") {
            out.prefix = Some(lit_str(meta, "prefix")?.value());
        } else if meta.path.is_ident("rename_all") {
            let rule = lit_str(meta, "rename_all")?;
            out.rename_all = Some(RenameRule::parse(&rule.value(), rule.span())?);
        } else if meta.path.is_ident("crate") {
            out.crate_path = Some(lit_str(meta, "crate")?.parse()?);
        } else {
            return Err(unknown(meta, "`prefix`, `rename_all`, or `crate`"));
        }
        Ok(())
    })?;
    Ok(out)
}

/// Extracts variant options.
pub(crate) fn parse_variant_attrs(attrs: &[Attribute]) -> syn::Result<VariantAttrs> {
    let mut out = VariantAttrs::default();
    parse_localized(attrs, |meta| {
        if meta.path.is_ident("key") {
            out.key = Some(lit_str(meta, "key")?);
            Ok(())
        } else {
            Err(unknown(meta, "`key`"))
        }
    })?;
    Ok(out)
}

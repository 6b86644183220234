//! Unit tests for the `LocalizedKey` expansion.

use crate::derive::expand;
use anyhow::{Result, anyhow, ensure};
use quote::quote;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

fn expand_err(input: &DeriveInput) -> Result<String> {
    match expand(input) {
        Ok(tokens) => Err(anyhow!("expected an error, expanded to {tokens}")),
        Err(err) => Ok(err
            .into_iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[rstest]
fn expands_variant_names_as_raw_keys() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        enum Strings {
            Title,
            #[localized(key = "Button.Selected.Title")]
            Selected,
        }
    };
    let tokens = expand(&input).map_err(|err| anyhow!("expansion failed: {err}"))?;
    let expected = quote! {
        impl ::localized::LocalizedKeyProvider for Strings {
            fn localized_key(&self) -> &str {
                match *self {
                    Self::Title => "Title",
                    Self::Selected => "Button.Selected.Title",
                }
            }
        }
    };
    ensure!(
        tokens.to_string() == expected.to_string(),
        "generated tokens differ: {tokens} != {expected}"
    );
    Ok(())
}

#[rstest]
fn expands_with_prefix_rename_and_crate_override() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[localized(prefix = "Login.", rename_all = "snake_case", crate = "ui::l10n")]
        enum Login<T> where T: Copy {
            ForgotPassword,
            r#Type,
        }
    };
    let tokens = expand(&input).map_err(|err| anyhow!("expansion failed: {err}"))?;
    let expected = quote! {
        impl<T> ui::l10n::LocalizedKeyProvider for Login<T> where T: Copy {
            fn localized_key(&self) -> &str {
                match *self {
                    Self::ForgotPassword => "Login.forgot_password",
                    Self::r#Type => "Login.type",
                }
            }
        }
    };
    ensure!(
        tokens.to_string() == expected.to_string(),
        "generated tokens differ: {tokens} != {expected}"
    );
    Ok(())
}

#[rstest]
fn empty_enums_expand_to_an_empty_match() -> Result<()> {
    let input: DeriveInput = parse_quote! { enum Never {} };
    let tokens = expand(&input).map_err(|err| anyhow!("expansion failed: {err}"))?;
    let rendered = tokens.to_string();
    ensure!(
        rendered.contains("LocalizedKeyProvider for Never") && !rendered.contains("=>"),
        "unexpected expansion: {rendered}"
    );
    Ok(())
}

#[rstest]
#[case::structs(
    parse_quote! { struct Strings { key: String } },
    "LocalizedKey can only be derived for enums"
)]
#[case::tuple_variant(
    parse_quote! { enum Strings { Title(String) } },
    "LocalizedKey variants must not carry fields"
)]
#[case::named_variant(
    parse_quote! { enum Strings { Title { text: String } } },
    "LocalizedKey variants must not carry fields"
)]
#[case::empty_key(
    parse_quote! { enum Strings { #[localized(key = "")] Title } },
    "localized key must not be empty"
)]
#[case::empty_key_with_rule(
    parse_quote! { #[localized(rename_all = "lowercase")] enum Strings { #[localized(key = "")] A } },
    "localized key must not be empty"
)]
#[case::duplicate_explicit(
    parse_quote! {
        enum Strings {
            #[localized(key = "Shared.Title")]
            First,
            #[localized(key = "Shared.Title")]
            Second,
        }
    },
    "duplicate localized key `Shared.Title`, already used by `First`"
)]
#[case::duplicate_after_rename(
    parse_quote! {
        #[localized(rename_all = "lowercase")]
        enum Strings {
            Title,
            #[localized(key = "title")]
            Heading,
        }
    },
    "duplicate localized key `title`, already used by `Title`"
)]
#[case::unknown_rule(
    parse_quote! { #[localized(rename_all = "Title Case")] enum Strings { A } },
    "unknown rename_all rule `Title Case`"
)]
#[case::unknown_variant_attr(
    parse_quote! { enum Strings { #[localized(name = "A")] A } },
    "unknown localized attribute `name`"
)]
fn rejects_invalid_key_sets(#[case] input: DeriveInput, #[case] expected: &str) -> Result<()> {
    let message = expand_err(&input)?;
    ensure!(
        message.contains(expected),
        "expected `{expected}` in diagnostics, got `{message}`"
    );
    Ok(())
}

#[rstest]
fn reports_every_invalid_variant_at_once() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        enum Strings {
            #[localized(key = "")]
            Empty,
            Tuple(u8),
            Title,
            #[localized(key = "Title")]
            AlsoTitle,
        }
    };
    let message = expand_err(&input)?;
    ensure!(
        message.lines().count() == 3,
        "expected three diagnostics, got `{message}`"
    );
    Ok(())
}

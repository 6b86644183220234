//! Demo login screen localised through `localized` bindings.
//!
//! The screen mirrors a typical sign-in view: a heading label, a username
//! field, and two buttons whose titles come from a secondary table. Strings
//! are resolved by a [`FluentResolver`] built from the bundled tables or from
//! a directory chosen on the command line.

pub mod cli;
pub mod error;
pub mod screen;
pub mod widgets;

use std::io::Write;
use std::sync::Arc;

use camino::Utf8Path;
use localized::{FluentResolver, LanguageIdentifier, Scope, StringResolver};

pub use crate::cli::Cli;
pub use crate::error::LoginScreenError;
pub use crate::screen::LoginScreen;

type BundledTables = &'static [(&'static str, &'static str)];

const EN_US: BundledTables = &[
    (
        "Localizable",
        include_str!("../locales/en-US/Localizable.ftl"),
    ),
    (
        "AnotherFile",
        include_str!("../locales/en-US/AnotherFile.ftl"),
    ),
];

const IT: BundledTables = &[
    ("Localizable", include_str!("../locales/it/Localizable.ftl")),
    ("AnotherFile", include_str!("../locales/it/AnotherFile.ftl")),
];

/// Parses a language tag supplied on the command line.
///
/// # Errors
///
/// Returns [`LoginScreenError::InvalidLocale`] when `value` is not a valid
/// tag.
pub fn parse_locale(value: &str) -> Result<LanguageIdentifier, LoginScreenError> {
    value
        .parse()
        .map_err(|err: localized::LanguageIdentifierError| LoginScreenError::InvalidLocale {
            value: value.to_owned(),
            message: err.to_string(),
        })
}

fn bundled_tables(locale: &LanguageIdentifier) -> Option<BundledTables> {
    match locale.language.as_str() {
        "en" => Some(EN_US),
        "it" => Some(IT),
        _ => None,
    }
}

/// Builds a resolver for `locale`.
///
/// With `strings_dir`, tables are read from `strings_dir/<locale>/`;
/// otherwise the bundled tables for the locale's language are used.
///
/// # Errors
///
/// Returns [`LoginScreenError::UnsupportedLocale`] when nothing is bundled for
/// the locale, or [`LoginScreenError::Resolver`] when a table cannot be read
/// or parsed.
pub fn build_resolver(
    locale: &LanguageIdentifier,
    strings_dir: Option<&Utf8Path>,
) -> Result<FluentResolver, LoginScreenError> {
    let base = FluentResolver::builder(locale.clone());
    let configured = if let Some(dir) = strings_dir {
        base.with_table_dir(Scope::MAIN, dir.join(locale.to_string()))
    } else {
        let tables = bundled_tables(locale)
            .ok_or_else(|| LoginScreenError::UnsupportedLocale(locale.clone()))?;
        tables.iter().fold(base, |builder, &(table, source)| {
            builder.with_table(Scope::MAIN, Some(table), source)
        })
    };
    Ok(configured.try_build()?)
}

/// Builds, attaches, and renders the screen as described by `cli`.
///
/// # Errors
///
/// Returns a [`LoginScreenError`] when the locale or its tables are invalid,
/// or when writing to `out` fails.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), LoginScreenError> {
    let locale = parse_locale(&cli.locale)?;
    let resolver: Arc<dyn StringResolver> =
        Arc::new(build_resolver(&locale, cli.strings_dir.as_deref())?);
    tracing::info!(%locale, strings_dir = ?cli.strings_dir, "rendering login screen");

    let mut screen = LoginScreen::new(&resolver);
    screen.attach();
    if cli.should_select {
        screen.tap_second_button();
    }
    screen.set_second_button_highlighted(cli.should_highlight);
    screen.render(out)?;
    Ok(())
}

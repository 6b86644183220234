//! Error types for the login screen demo.

use localized::{FluentResolverError, LanguageIdentifier};
use thiserror::Error;

/// Errors surfaced while building or rendering the login screen.
#[derive(Debug, Error)]
pub enum LoginScreenError {
    /// The locale flag was not a valid language tag.
    #[error("failed to parse locale '{value}': {message}")]
    InvalidLocale {
        /// Tag as supplied.
        value: String,
        /// Parser diagnostic.
        message: String,
    },

    /// No embedded tables exist for the locale and no directory was given.
    #[error("no bundled strings for locale '{0}'; pass --strings-dir")]
    UnsupportedLocale(LanguageIdentifier),

    /// Fluent rejected one of the tables.
    #[error(transparent)]
    Resolver(#[from] FluentResolverError),

    /// Writing the rendered screen failed.
    #[error("failed to write the rendered screen: {0}")]
    Write(#[from] std::io::Error),
}

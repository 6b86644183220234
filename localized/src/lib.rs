//! Declarative localisation bindings for UI components.
//!
//! A component is described by one or more [`LocalizedConfiguration`] values,
//! each pairing a [`ControlState`] with a key provider. A [`Localized`]
//! binding owns that list alongside a table name, a [`Scope`], and a
//! [`StringResolver`]. Whenever the bound item is assigned through
//! [`Localized::set`], every configuration is resolved and pushed into the
//! item through the [`Localizable`] capability, in declaration order.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use localized::{
//!     CatalogueResolver, ControlState, Localizable, Localized, LocalizedConfiguration,
//!     LocalizedOptions, Scope,
//! };
//!
//! #[derive(Default)]
//! struct Label {
//!     text: String,
//! }
//!
//! impl Localizable for Label {
//!     fn set_localized_string(&mut self, string: &str, _state: ControlState) {
//!         self.text = string.to_owned();
//!     }
//! }
//!
//! let resolver = CatalogueResolver::new().with_entry(Scope::MAIN, None, "Label.Title", "Hello");
//! let mut title: Localized<Label> =
//!     Localized::new("Label.Title", LocalizedOptions::default(), Arc::new(resolver));
//! title.set(Some(Label::default()));
//! assert_eq!(title.get().map(|label| label.text.as_str()), Some("Hello"));
//! ```
//!
//! Enumerated key sets derive [`LocalizedKey`], which checks at compile time
//! that every variant maps to a distinct, non-empty key.

pub use localized_macros::LocalizedKey;

// Lets `#[derive(LocalizedKey)]` expand inside this crate's own tests.
extern crate self as localized;

mod binding;
mod configuration;
mod key;
mod localizable;
pub mod resolver;
mod state;

pub use binding::{Localized, LocalizedOptions};
pub use configuration::LocalizedConfiguration;
pub use key::LocalizedKeyProvider;
pub use localizable::Localizable;
pub use resolver::{
    CatalogueResolver, FluentResolver, FluentResolverBuilder, FluentResolverError,
    FormattingIssue, FormattingIssueReporter, NoOpResolver, PRIMARY_TABLE, Scope, StringResolver,
};
pub use state::ControlState;

/// Re-exported so callers can name Fluent locales without a direct dependency.
pub use unic_langid::{LanguageIdentifier, LanguageIdentifierError, langid};

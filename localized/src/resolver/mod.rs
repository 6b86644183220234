//! String resolution behind [`Localized`](crate::Localized) bindings.
//!
//! `StringResolver` abstracts the lookup of a key within a table and scope so
//! bindings never depend on a concrete translation backend. Implementations
//! may forward to Fluent tables, embed simple maps for testing, or proxy to a
//! platform string store. The miss policy lives in
//! [`StringResolver::resolve`]: by default a missing key resolves to the key
//! itself, and implementations can override it with their own placeholder.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use camino::Utf8PathBuf;
use fluent_bundle::FluentError;
use fluent_syntax::parser::ParserError;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

mod catalogue;
mod fluent;

pub use catalogue::CatalogueResolver;
use fluent::{TableBundle, fluent_id};

/// Name of the table consulted when a binding does not name one.
pub const PRIMARY_TABLE: &str = "Localizable";

/// Names the resolution context (bundle set) a lookup runs in.
///
/// [`Scope::MAIN`] is the default for every binding. Scopes are plain values:
/// nothing in this crate consults process-wide state to pick one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scope(Cow<'static, str>);

impl Scope {
    /// The application's own strings.
    pub const MAIN: Self = Self(Cow::Borrowed("main"));

    /// Creates a scope with the given name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the scope name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::MAIN
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves localisation keys to display strings.
///
/// `table` is `None` for the primary table ([`PRIMARY_TABLE`]). The trait is
/// object-safe so bindings can share a resolver behind `Arc<dyn StringResolver>`.
pub trait StringResolver: Send + Sync {
    /// Looks `key` up in `table` within `scope`, returning `None` on a miss.
    fn lookup(&self, key: &str, table: Option<&str>, scope: &Scope) -> Option<String>;

    /// Resolves `key`, substituting the key itself when no string exists.
    ///
    /// # Examples
    /// ```rust
    /// use localized::{Scope, StringResolver};
    ///
    /// struct AlwaysMissing;
    ///
    /// impl StringResolver for AlwaysMissing {
    ///     fn lookup(&self, _key: &str, _table: Option<&str>, _scope: &Scope) -> Option<String> {
    ///         None
    ///     }
    /// }
    ///
    /// assert_eq!(AlwaysMissing.resolve("Label.Title", None, &Scope::MAIN), "Label.Title");
    /// ```
    fn resolve(&self, key: &str, table: Option<&str>, scope: &Scope) -> String {
        self.lookup(key, table, scope)
            .unwrap_or_else(|| key.to_owned())
    }
}

impl<T: StringResolver + ?Sized> StringResolver for &T {
    fn lookup(&self, key: &str, table: Option<&str>, scope: &Scope) -> Option<String> {
        (**self).lookup(key, table, scope)
    }

    fn resolve(&self, key: &str, table: Option<&str>, scope: &Scope) -> String {
        (**self).resolve(key, table, scope)
    }
}

impl<T: StringResolver + ?Sized> StringResolver for Box<T> {
    fn lookup(&self, key: &str, table: Option<&str>, scope: &Scope) -> Option<String> {
        (**self).lookup(key, table, scope)
    }

    fn resolve(&self, key: &str, table: Option<&str>, scope: &Scope) -> String {
        (**self).resolve(key, table, scope)
    }
}

impl<T: StringResolver + ?Sized> StringResolver for Arc<T> {
    fn lookup(&self, key: &str, table: Option<&str>, scope: &Scope) -> Option<String> {
        (**self).lookup(key, table, scope)
    }

    fn resolve(&self, key: &str, table: Option<&str>, scope: &Scope) -> String {
        (**self).resolve(key, table, scope)
    }
}

/// Resolver that declines to translate, so every key resolves to itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpResolver;

impl NoOpResolver {
    /// Creates a new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StringResolver for NoOpResolver {
    fn lookup(&self, _key: &str, _table: Option<&str>, _scope: &Scope) -> Option<String> {
        None
    }
}

/// Captures formatting failures encountered when resolving Fluent patterns.
#[derive(Debug, Clone)]
pub struct FormattingIssue {
    /// Key that failed to resolve.
    pub key: String,
    /// Table holding the message.
    pub table: String,
    /// Scope holding the table.
    pub scope: Scope,
    /// Locale the resolver was built for.
    pub locale: LanguageIdentifier,
    /// Formatting or resolver errors emitted by Fluent.
    pub errors: Vec<FluentError>,
}

/// Reporter invoked when Fluent raises formatting errors.
pub type FormattingIssueReporter = Arc<dyn Fn(&FormattingIssue) + Send + Sync>;

/// Fluent-backed resolver holding one bundle per `(scope, table)` pair.
pub struct FluentResolver {
    locale: LanguageIdentifier,
    tables: Vec<TableBundle>,
    report_issue: FormattingIssueReporter,
}

/// Source of a table registered with a [`FluentResolverBuilder`].
#[derive(Debug, Clone)]
enum TableSource {
    Inline {
        scope: Scope,
        table: String,
        source: String,
    },
    Directory {
        scope: Scope,
        dir: Utf8PathBuf,
    },
}

/// Builds a [`FluentResolver`].
pub struct FluentResolverBuilder {
    locale: LanguageIdentifier,
    sources: Vec<TableSource>,
    report_issue: FormattingIssueReporter,
}

/// Errors surfaced when constructing a [`FluentResolver`].
#[derive(Debug, Error)]
pub enum FluentResolverError {
    /// Failed to parse Fluent text into a resource.
    #[error("failed to parse table {table} in scope {scope} for {locale}")]
    Parser {
        /// Locale the resolver was built for.
        locale: LanguageIdentifier,
        /// Scope holding the table.
        scope: Scope,
        /// Table that failed to parse.
        table: String,
        /// Parser errors emitted by Fluent.
        errors: Vec<ParserError>,
    },

    /// Fluent rejected a resource while registering it in the bundle.
    #[error("failed to register table {table} in scope {scope} for {locale}")]
    Registration {
        /// Locale the resolver was built for.
        locale: LanguageIdentifier,
        /// Scope holding the table.
        scope: Scope,
        /// Table that failed to register.
        table: String,
        /// Errors returned by Fluent during registration.
        errors: Vec<FluentError>,
    },

    /// The same table was supplied twice for one scope.
    #[error("table {table} is registered more than once in scope {scope}")]
    DuplicateTable {
        /// Scope holding the table.
        scope: Scope,
        /// Table supplied more than once.
        table: String,
    },

    /// A table directory or file could not be read.
    #[error("failed to read Fluent tables from '{path}': {source}")]
    Io {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl FluentResolver {
    /// Starts building a resolver for the provided locale.
    ///
    /// # Examples
    /// ```rust
    /// use localized::{FluentResolver, Scope, StringResolver, langid};
    ///
    /// let resolver = FluentResolver::builder(langid!("en-US"))
    ///     .with_table(Scope::MAIN, None, "Label.Title = Welcome")
    ///     .try_build()
    ///     .expect("inline table should parse");
    /// assert_eq!(resolver.resolve("Label.Title", None, &Scope::MAIN), "Welcome");
    /// ```
    #[must_use]
    pub fn builder(locale: LanguageIdentifier) -> FluentResolverBuilder {
        FluentResolverBuilder::new(locale)
    }

    /// Locale the tables were built for.
    #[must_use]
    pub const fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    fn table(&self, table: &str, scope: &Scope) -> Option<&TableBundle> {
        self.tables
            .iter()
            .find(|bundle| bundle.table == table && bundle.scope == *scope)
    }
}

impl StringResolver for FluentResolver {
    fn lookup(&self, key: &str, table: Option<&str>, scope: &Scope) -> Option<String> {
        let table_name = table.unwrap_or(PRIMARY_TABLE);
        let bundle = self.table(table_name, scope)?;
        let dashed_key = fluent_id(key);
        let pattern = [key, dashed_key.as_ref()]
            .into_iter()
            .find_map(|lookup_key| {
                bundle
                    .bundle
                    .get_message(lookup_key)
                    .and_then(|message| message.value())
            })?;

        let mut errors = Vec::new();
        let rendered = bundle.bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            return Some(rendered.into_owned());
        }

        (self.report_issue)(&FormattingIssue {
            key: key.to_owned(),
            table: table_name.to_owned(),
            scope: scope.clone(),
            locale: self.locale.clone(),
            errors,
        });
        None
    }
}

impl fmt::Debug for FluentResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentResolver")
            .field("locale", &self.locale)
            .field("tables", &self.tables)
            .field("report_issue", &"<formatter>")
            .finish()
    }
}

#[must_use]
fn default_reporter() -> FormattingIssueReporter {
    Arc::new(|issue: &FormattingIssue| {
        tracing::warn!(
            key = %issue.key,
            table = %issue.table,
            scope = %issue.scope,
            locale = %issue.locale,
            errors = ?issue.errors,
            "failed to format Fluent message"
        );
    })
}

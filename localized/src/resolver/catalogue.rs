//! In-memory string tables.

use std::collections::HashMap;

use super::{PRIMARY_TABLE, Scope, StringResolver};

/// Resolver backed by an in-memory `(scope, table) -> key -> string` map.
///
/// Useful for tests, demos, and applications that assemble their strings at
/// start-up. A `None` table always means [`PRIMARY_TABLE`].
///
/// # Examples
/// ```rust
/// use localized::{CatalogueResolver, Scope, StringResolver};
///
/// let resolver = CatalogueResolver::new()
///     .with_entry(Scope::MAIN, None, "Label.Title", "Welcome")
///     .with_entry(Scope::MAIN, Some("AnotherFile"), "Label.Title", "Hello again");
///
/// assert_eq!(resolver.resolve("Label.Title", None, &Scope::MAIN), "Welcome");
/// assert_eq!(
///     resolver.resolve("Label.Title", Some("AnotherFile"), &Scope::MAIN),
///     "Hello again"
/// );
/// assert_eq!(resolver.resolve("Missing", None, &Scope::MAIN), "Missing");
/// ```
#[derive(Debug, Default, Clone)]
pub struct CatalogueResolver {
    tables: HashMap<(Scope, String), HashMap<String, String>>,
}

impl CatalogueResolver {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key = value` to `table` within `scope`, returning the catalogue.
    #[must_use]
    pub fn with_entry(
        mut self,
        scope: Scope,
        table: Option<&str>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(scope, table, key, value);
        self
    }

    /// Adds `key = value` to `table` within `scope`, returning any value it
    /// replaced.
    pub fn insert(
        &mut self,
        scope: Scope,
        table: Option<&str>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.tables
            .entry((scope, table.unwrap_or(PRIMARY_TABLE).to_owned()))
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Number of entries across every table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    /// Returns `true` when no entries have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}

impl StringResolver for CatalogueResolver {
    fn lookup(&self, key: &str, table: Option<&str>, scope: &Scope) -> Option<String> {
        self.tables
            .get(&(scope.clone(), table.unwrap_or(PRIMARY_TABLE).to_owned()))
            .and_then(|entries| entries.get(key))
            .cloned()
    }
}

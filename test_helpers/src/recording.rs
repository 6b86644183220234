//! Recording doubles for localisable targets and resolvers.

use std::sync::Arc;

use localized::{CatalogueResolver, ControlState, Localizable, Scope, StringResolver};
use parking_lot::Mutex;

/// Localisable target that remembers every string applied to it.
///
/// # Examples
///
/// ```
/// use localized::{ControlState, Localizable};
/// use localized_test_helpers::RecordingTarget;
///
/// let mut target = RecordingTarget::default();
/// target.set_localized_string("Go", ControlState::NORMAL);
/// assert_eq!(target.value_for(ControlState::NORMAL), Some("Go"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingTarget {
    calls: Vec<(String, ControlState)>,
}

impl RecordingTarget {
    /// Every `(string, state)` pair applied so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[(String, ControlState)] {
        &self.calls
    }

    /// The most recent string applied for `state`.
    #[must_use]
    pub fn value_for(&self, state: ControlState) -> Option<&str> {
        self.calls
            .iter()
            .rev()
            .find(|(_, applied)| *applied == state)
            .map(|(value, _)| value.as_str())
    }

    /// Forgets the recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Localizable for RecordingTarget {
    fn set_localized_string(&mut self, string: &str, state: ControlState) {
        self.calls.push((string.to_owned(), state));
    }
}

/// A single logged resolver lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Key passed to the resolver.
    pub key: String,
    /// Table passed to the resolver, `None` for the primary table.
    pub table: Option<String>,
    /// Scope passed to the resolver.
    pub scope: Scope,
}

/// Resolver that logs lookups and answers from an in-memory catalogue.
#[derive(Debug, Default)]
pub struct RecordingResolver {
    inner: CatalogueResolver,
    lookups: Mutex<Vec<Lookup>>,
}

impl RecordingResolver {
    /// Wraps `inner`, returning a shared handle suitable for bindings.
    #[must_use]
    pub fn new(inner: CatalogueResolver) -> Arc<Self> {
        Arc::new(Self {
            inner,
            lookups: Mutex::default(),
        })
    }

    /// Lookups performed so far, oldest first.
    #[must_use]
    pub fn lookups(&self) -> Vec<Lookup> {
        self.lookups.lock().clone()
    }

    /// Number of lookups performed so far.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().len()
    }
}

impl StringResolver for RecordingResolver {
    fn lookup(&self, key: &str, table: Option<&str>, scope: &Scope) -> Option<String> {
        self.lookups.lock().push(Lookup {
            key: key.to_owned(),
            table: table.map(str::to_owned),
            scope: scope.clone(),
        });
        self.inner.lookup(key, table, scope)
    }
}

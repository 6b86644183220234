//! Immutable (state, key provider) pairs consumed by [`Localized`](crate::Localized).

use crate::{ControlState, LocalizedKeyProvider};

/// Associates a key provider with the [`ControlState`] it localises.
///
/// Values are built through [`LocalizedConfiguration::key`] and cannot be
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedConfiguration<K> {
    state: ControlState,
    key_provider: K,
}

impl<K: LocalizedKeyProvider> LocalizedConfiguration<K> {
    /// Pairs `key_provider` with `state`.
    ///
    /// # Examples
    /// ```rust
    /// use localized::{ControlState, LocalizedConfiguration};
    ///
    /// let selected = LocalizedConfiguration::key("Button.Selected.Title", ControlState::SELECTED);
    /// assert_eq!(selected.state(), ControlState::SELECTED);
    /// assert_eq!(selected.localized_key(), "Button.Selected.Title");
    /// ```
    #[must_use]
    pub const fn key(key_provider: K, state: ControlState) -> Self {
        Self {
            state,
            key_provider,
        }
    }

    /// State the resolved string is applied to.
    #[must_use]
    pub const fn state(&self) -> ControlState {
        self.state
    }

    /// Provider supplying the lookup key.
    #[must_use]
    pub const fn key_provider(&self) -> &K {
        &self.key_provider
    }

    /// Canonical key produced by the provider.
    #[must_use]
    pub fn localized_key(&self) -> &str {
        self.key_provider.localized_key()
    }
}

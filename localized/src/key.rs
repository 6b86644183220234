//! Key providers turn key-like values into canonical lookup keys.
//!
//! Strings act as their own key. Enumerated key sets derive
//! [`LocalizedKey`](crate::LocalizedKey) so call sites name keys through
//! checked variants instead of hand-typed literals.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Supplies the canonical key handed to a [`StringResolver`].
///
/// The returned key must stay the same for the lifetime of the provider.
///
/// # Examples
/// ```rust
/// use localized::{LocalizedKey, LocalizedKeyProvider};
///
/// #[derive(LocalizedKey)]
/// #[localized(prefix = "MyStrings.")]
/// enum MyStrings {
///     MyLabel,
///     #[localized(key = "Shared.Ok")]
///     Confirm,
/// }
///
/// assert_eq!("Label.Title".localized_key(), "Label.Title");
/// assert_eq!(MyStrings::MyLabel.localized_key(), "MyStrings.MyLabel");
/// assert_eq!(MyStrings::Confirm.localized_key(), "Shared.Ok");
/// ```
///
/// [`StringResolver`]: crate::StringResolver
pub trait LocalizedKeyProvider {
    /// Returns the canonical lookup key.
    fn localized_key(&self) -> &str;
}

impl LocalizedKeyProvider for str {
    fn localized_key(&self) -> &str {
        self
    }
}

impl LocalizedKeyProvider for String {
    fn localized_key(&self) -> &str {
        self.as_str()
    }
}

impl LocalizedKeyProvider for Cow<'_, str> {
    fn localized_key(&self) -> &str {
        self.as_ref()
    }
}

impl<T: LocalizedKeyProvider + ?Sized> LocalizedKeyProvider for &T {
    fn localized_key(&self) -> &str {
        (**self).localized_key()
    }
}

impl<T: LocalizedKeyProvider + ?Sized> LocalizedKeyProvider for Box<T> {
    fn localized_key(&self) -> &str {
        (**self).localized_key()
    }
}

impl<T: LocalizedKeyProvider + ?Sized> LocalizedKeyProvider for Rc<T> {
    fn localized_key(&self) -> &str {
        (**self).localized_key()
    }
}

impl<T: LocalizedKeyProvider + ?Sized> LocalizedKeyProvider for Arc<T> {
    fn localized_key(&self) -> &str {
        (**self).localized_key()
    }
}

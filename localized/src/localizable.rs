//! The capability a bound item implements to receive localised strings.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError};

use crate::ControlState;

/// Accepts a resolved string for a given [`ControlState`].
///
/// Implement this for each widget type that should be driven by a
/// [`Localized`](crate::Localized) binding. Implementations decide what
/// "applying" means: a button stores a title per state, a label replaces its
/// text and ignores the state, a text field updates its placeholder.
///
/// The state is always the configuration's own value; types with a single
/// presentation are free to ignore it.
pub trait Localizable {
    /// Applies `string` to the presentation associated with `state`.
    fn set_localized_string(&mut self, string: &str, state: ControlState);
}

impl<T: Localizable + ?Sized> Localizable for &mut T {
    fn set_localized_string(&mut self, string: &str, state: ControlState) {
        (**self).set_localized_string(string, state);
    }
}

impl<T: Localizable + ?Sized> Localizable for Box<T> {
    fn set_localized_string(&mut self, string: &str, state: ControlState) {
        (**self).set_localized_string(string, state);
    }
}

/// Shared outlets owned by a view hierarchy.
///
/// The inner value is borrowed mutably for the duration of the call, so the
/// caller must not hold another borrow while a binding is assigned.
impl<T: Localizable + ?Sized> Localizable for Rc<RefCell<T>> {
    fn set_localized_string(&mut self, string: &str, state: ControlState) {
        self.borrow_mut().set_localized_string(string, state);
    }
}

/// A poisoned lock is recovered: the call only overwrites presentation text.
impl<T: Localizable + ?Sized> Localizable for Arc<Mutex<T>> {
    fn set_localized_string(&mut self, string: &str, state: ControlState) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set_localized_string(string, state);
    }
}

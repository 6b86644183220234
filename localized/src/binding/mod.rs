//! The binding engine that pushes resolved strings into a bound item.
//!
//! A [`Localized`] value is the explicit replacement for an annotated outlet:
//! it is built once with its configurations, table, scope, and resolver, and
//! then [`Localized::set`] is called whenever the underlying item becomes
//! available. Every assignment of `Some(item)` resolves each configuration in
//! declaration order and applies the result through [`Localizable`].

use std::fmt;
use std::sync::Arc;

use crate::{
    ControlState, Localizable, LocalizedConfiguration, LocalizedKeyProvider, Scope, StringResolver,
};

/// Table and scope a [`Localized`] binding resolves its keys in.
///
/// The default names the primary table and [`Scope::MAIN`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedOptions {
    table: Option<String>,
    scope: Scope,
}

impl LocalizedOptions {
    /// Options for the primary table in [`Scope::MAIN`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves keys in the named table instead of the primary one.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Resolves keys within `scope`.
    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Named table, or `None` for the primary table.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Scope keys are resolved in.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Binds localised strings to an item that implements [`Localizable`].
///
/// `Item` is whatever handle the owner keeps for the component: the widget
/// itself, `&mut Widget`, `Rc<RefCell<Widget>>`, or a boxed trait object. The
/// binding never cleans the item up; it only calls
/// [`Localizable::set_localized_string`] on it.
///
/// # Examples
/// ```rust
/// use std::collections::BTreeMap;
/// use std::sync::Arc;
///
/// use localized::{
///     CatalogueResolver, ControlState, Localizable, Localized, LocalizedConfiguration,
///     LocalizedOptions, Scope,
/// };
///
/// #[derive(Default)]
/// struct Button {
///     titles: BTreeMap<u32, String>,
/// }
///
/// impl Localizable for Button {
///     fn set_localized_string(&mut self, string: &str, state: ControlState) {
///         self.titles.insert(state.bits(), string.to_owned());
///     }
/// }
///
/// let resolver = CatalogueResolver::new()
///     .with_entry(Scope::MAIN, Some("AnotherFile"), "Button.Title", "Go")
///     .with_entry(Scope::MAIN, Some("AnotherFile"), "Button.Selected.Title", "Going");
///
/// let mut button: Localized<Button> = Localized::with_configurations(
///     [
///         LocalizedConfiguration::key("Button.Title", ControlState::NORMAL),
///         LocalizedConfiguration::key("Button.Selected.Title", ControlState::SELECTED),
///     ],
///     LocalizedOptions::new().with_table("AnotherFile"),
///     Arc::new(resolver),
/// );
/// button.set(Some(Button::default()));
///
/// let titles = &button.get().expect("button was bound").titles;
/// assert_eq!(titles[&ControlState::NORMAL.bits()], "Go");
/// assert_eq!(titles[&ControlState::SELECTED.bits()], "Going");
/// ```
pub struct Localized<Item, K = &'static str> {
    configurations: Vec<LocalizedConfiguration<K>>,
    options: LocalizedOptions,
    resolver: Arc<dyn StringResolver>,
    item: Option<Item>,
}

impl<Item, K: LocalizedKeyProvider> Localized<Item, K> {
    /// Creates a binding with a single configuration for
    /// [`ControlState::NORMAL`].
    #[must_use]
    pub fn new(
        key_provider: K,
        options: LocalizedOptions,
        resolver: Arc<dyn StringResolver>,
    ) -> Self {
        Self::with_configurations(
            [LocalizedConfiguration::key(key_provider, ControlState::NORMAL)],
            options,
            resolver,
        )
    }

    /// Creates a binding from an ordered list of configurations.
    ///
    /// An empty list is valid and makes every assignment a no-op.
    /// Configurations sharing a state are all applied, in order, so the last
    /// one determines what the item ends up presenting for that state.
    #[must_use]
    pub fn with_configurations(
        configurations: impl IntoIterator<Item = LocalizedConfiguration<K>>,
        options: LocalizedOptions,
        resolver: Arc<dyn StringResolver>,
    ) -> Self {
        Self {
            configurations: configurations.into_iter().collect(),
            options,
            resolver,
            item: None,
        }
    }

    /// Configurations in dispatch order.
    #[must_use]
    pub fn configurations(&self) -> &[LocalizedConfiguration<K>] {
        &self.configurations
    }

    /// Table and scope keys are resolved in.
    #[must_use]
    pub const fn options(&self) -> &LocalizedOptions {
        &self.options
    }

    /// The bound item, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    /// Mutable access to the bound item, if any.
    #[must_use]
    pub const fn get_mut(&mut self) -> Option<&mut Item> {
        self.item.as_mut()
    }

    /// Detaches the bound item without localising anything.
    pub const fn take(&mut self) -> Option<Item> {
        self.item.take()
    }

    /// Resolves every configuration and applies it to `target`.
    ///
    /// `target` is not stored, which suits outlets the caller only borrows.
    pub fn localize<T: Localizable + ?Sized>(&self, target: &mut T) {
        dispatch(&self.configurations, &self.options, &*self.resolver, target);
    }
}

impl<Item: Localizable, K: LocalizedKeyProvider> Localized<Item, K> {
    /// Binds `item` and, when it is present, localises it.
    ///
    /// `None` clears the binding and resolves nothing. Any previously bound
    /// item is dropped without further calls.
    pub fn set(&mut self, item: Option<Item>) {
        self.replace(item);
    }

    /// Binds `item` like [`Localized::set`], returning the previous item.
    pub fn replace(&mut self, item: Option<Item>) -> Option<Item> {
        let previous = std::mem::replace(&mut self.item, item);
        if let Some(target) = self.item.as_mut() {
            dispatch(&self.configurations, &self.options, &*self.resolver, target);
        }
        previous
    }
}

fn dispatch<K, T>(
    configurations: &[LocalizedConfiguration<K>],
    options: &LocalizedOptions,
    resolver: &dyn StringResolver,
    target: &mut T,
) where
    K: LocalizedKeyProvider,
    T: Localizable + ?Sized,
{
    for configuration in configurations {
        let key = configuration.localized_key();
        let state = configuration.state();
        let resolved = resolver.resolve(key, options.table(), options.scope());
        tracing::trace!(
            key,
            state = ?state,
            table = options.table(),
            scope = %options.scope(),
            "applying localised string"
        );
        target.set_localized_string(&resolved, state);
    }
}

impl<Item: fmt::Debug, K: fmt::Debug> fmt::Debug for Localized<Item, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localized")
            .field("configurations", &self.configurations)
            .field("options", &self.options)
            .field("resolver", &"<resolver>")
            .field("item", &self.item)
            .finish()
    }
}

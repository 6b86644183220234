//! Minimal widget models standing in for a UI toolkit.
//!
//! Each widget implements [`Localizable`] in the way its real counterpart
//! would: labels replace their text, buttons keep one title per state, and
//! text fields localise their placeholder.

use std::collections::HashMap;

use localized::{ControlState, Localizable};

/// Static text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    /// Text currently displayed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Localizable for Label {
    fn set_localized_string(&mut self, string: &str, _state: ControlState) {
        string.clone_into(&mut self.text);
    }
}

/// A push button with per-state titles.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Button {
    titles: HashMap<ControlState, String>,
    state: ControlState,
}

impl Button {
    /// Title shown for the current state.
    ///
    /// Falls back to the normal title when the current state has none.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title_for(self.state)
            .or_else(|| self.title_for(ControlState::NORMAL))
    }

    /// Title registered for exactly `state`.
    #[must_use]
    pub fn title_for(&self, state: ControlState) -> Option<&str> {
        self.titles.get(&state).map(String::as_str)
    }

    /// Current interaction state.
    #[must_use]
    pub const fn state(&self) -> ControlState {
        self.state
    }

    /// Whether the button is selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.state.contains(ControlState::SELECTED)
    }

    /// Sets or clears the selected flag.
    pub fn set_selected(&mut self, selected: bool) {
        self.state.set(ControlState::SELECTED, selected);
    }

    /// Sets or clears the highlighted flag.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.state.set(ControlState::HIGHLIGHTED, highlighted);
    }
}

impl Localizable for Button {
    fn set_localized_string(&mut self, string: &str, state: ControlState) {
        self.titles.insert(state, string.to_owned());
    }
}

/// Editable text input whose placeholder is localised.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextField {
    placeholder: String,
    text: String,
}

impl TextField {
    /// Placeholder shown while the field is empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// User-entered text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the user-entered text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Localizable for TextField {
    fn set_localized_string(&mut self, string: &str, _state: ControlState) {
        string.clone_into(&mut self.placeholder);
    }
}

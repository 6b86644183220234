//! A login screen whose outlets are localised through bindings.

use std::io::{self, Write};
use std::sync::Arc;

use localized::{
    ControlState, Localized, LocalizedConfiguration, LocalizedKey, LocalizedOptions,
    StringResolver,
};

use crate::widgets::{Button, Label, TextField};

/// Table holding the button titles.
pub const BUTTON_TABLE: &str = "AnotherFile";

/// Keys for the strings in the primary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LocalizedKey)]
pub enum ScreenStrings {
    /// Heading above the form.
    #[localized(key = "Label.Title")]
    Title,
    /// Placeholder of the username field.
    #[localized(key = "TextField.Placeholder")]
    UsernamePlaceholder,
}

/// Keys for the button titles in [`BUTTON_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, LocalizedKey)]
#[localized(prefix = "Button.")]
pub enum ButtonStrings {
    /// Title shown in the normal state.
    Title,
    /// Title shown while selected.
    #[localized(key = "Button.Selected.Title")]
    Selected,
    /// Title shown while highlighted.
    #[localized(key = "Button.Highlighted.Title")]
    Highlighted,
}

/// The screen and its bindings.
///
/// Bindings are built up front; [`LoginScreen::attach`] plays the part of
/// the toolkit loading the outlets.
#[derive(Debug)]
pub struct LoginScreen {
    title: Localized<Label, ScreenStrings>,
    username: Localized<TextField, ScreenStrings>,
    first_button: Localized<Button, ButtonStrings>,
    second_button: Localized<Button, ButtonStrings>,
}

impl LoginScreen {
    /// Builds every binding against `resolver`.
    #[must_use]
    pub fn new(resolver: &Arc<dyn StringResolver>) -> Self {
        let buttons = LocalizedOptions::new().with_table(BUTTON_TABLE);
        Self {
            title: Localized::new(
                ScreenStrings::Title,
                LocalizedOptions::default(),
                Arc::clone(resolver),
            ),
            username: Localized::new(
                ScreenStrings::UsernamePlaceholder,
                LocalizedOptions::default(),
                Arc::clone(resolver),
            ),
            first_button: Localized::with_configurations(
                [
                    LocalizedConfiguration::key(ButtonStrings::Title, ControlState::NORMAL),
                    LocalizedConfiguration::key(ButtonStrings::Selected, ControlState::SELECTED),
                ],
                buttons.clone(),
                Arc::clone(resolver),
            ),
            second_button: Localized::with_configurations(
                [
                    LocalizedConfiguration::key(ButtonStrings::Title, ControlState::NORMAL),
                    LocalizedConfiguration::key(
                        ButtonStrings::Highlighted,
                        ControlState::HIGHLIGHTED,
                    ),
                ],
                buttons,
                Arc::clone(resolver),
            ),
        }
    }

    /// Creates the widgets and hands them to their bindings.
    pub fn attach(&mut self) {
        self.title.set(Some(Label::default()));
        self.username.set(Some(TextField::default()));
        self.first_button.set(Some(Button::default()));
        self.second_button.set(Some(Button::default()));
        tracing::debug!("login screen outlets attached");
    }

    /// Handles a tap on the second button by toggling the first one.
    pub fn tap_second_button(&mut self) {
        if let Some(button) = self.first_button.get_mut() {
            button.set_selected(!button.is_selected());
        }
    }

    /// Highlights or releases the second button.
    pub fn set_second_button_highlighted(&mut self, highlighted: bool) {
        if let Some(button) = self.second_button.get_mut() {
            button.set_highlighted(highlighted);
        }
    }

    /// The heading label, once attached.
    #[must_use]
    pub const fn title(&self) -> Option<&Label> {
        self.title.get()
    }

    /// The username field, once attached.
    #[must_use]
    pub const fn username(&self) -> Option<&TextField> {
        self.username.get()
    }

    /// The first button, once attached.
    #[must_use]
    pub const fn first_button(&self) -> Option<&Button> {
        self.first_button.get()
    }

    /// The second button, once attached.
    #[must_use]
    pub const fn second_button(&self) -> Option<&Button> {
        self.second_button.get()
    }

    /// Writes a plain-text rendering of the screen.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(label) = self.title() {
            writeln!(out, "{}", label.text())?;
        }
        if let Some(field) = self.username() {
            writeln!(out, "[ {} ]", field.placeholder())?;
        }
        for button in [self.first_button(), self.second_button()]
            .into_iter()
            .flatten()
        {
            writeln!(
                out,
                "< {} >{}",
                button.title().unwrap_or_default(),
                state_suffix(button.state())
            )?;
        }
        Ok(())
    }
}

fn state_suffix(state: ControlState) -> String {
    if state.is_normal() {
        return String::new();
    }
    let names: Vec<&str> = state.iter_names().map(|(name, _)| name).collect();
    format!(" ({})", names.join(", ").to_lowercase())
}

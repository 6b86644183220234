//! Placeholder parsing for behavioural step definitions.

use localized::ControlState;

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(trimmed)
}

/// Parses a control state written as names joined by `+`.
///
/// Names are matched case-insensitively; `normal` maps to the empty set.
///
/// # Examples
///
/// ```
/// use localized::ControlState;
/// use localized_test_helpers::text::parse_state;
///
/// assert_eq!(parse_state("normal"), Some(ControlState::NORMAL));
/// assert_eq!(
///     parse_state("Selected+Highlighted"),
///     Some(ControlState::SELECTED | ControlState::HIGHLIGHTED)
/// );
/// assert_eq!(parse_state("pressed"), None);
/// ```
#[must_use]
pub fn parse_state(value: &str) -> Option<ControlState> {
    unquote(value)
        .split('+')
        .try_fold(ControlState::NORMAL, |state, name| {
            let flag = match name.trim().to_ascii_lowercase().as_str() {
                "normal" => ControlState::NORMAL,
                "highlighted" => ControlState::HIGHLIGHTED,
                "disabled" => ControlState::DISABLED,
                "selected" => ControlState::SELECTED,
                "focused" => ControlState::FOCUSED,
                _ => return None,
            };
            Some(state | flag)
        })
}

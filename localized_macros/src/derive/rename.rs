//! Casing rules for `#[localized(rename_all = "...")]`.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};

/// How variant names are recased before becoming keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    pub(crate) const NAMES: [&'static str; 8] = [
        "lowercase",
        "UPPERCASE",
        "PascalCase",
        "camelCase",
        "snake_case",
        "SCREAMING_SNAKE_CASE",
        "kebab-case",
        "SCREAMING-KEBAB-CASE",
    ];

    pub(crate) fn parse(s: &str, span: proc_macro2::Span) -> Result<Self, syn::Error> {
        match s {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Ok(Self::ScreamingKebab),
            _ => Err(syn::Error::new(
                span,
                format!(
                    "unknown rename_all rule `{s}`, expected one of: {}",
                    Self::NAMES.join(", ")
                ),
            )),
        }
    }

    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
            Self::Pascal => name.to_upper_camel_case(),
            Self::Camel => name.to_lower_camel_case(),
            Self::Snake => name.to_snake_case(),
            Self::ScreamingSnake => name.to_shouty_snake_case(),
            Self::Kebab => name.to_kebab_case(),
            Self::ScreamingKebab => name.to_shouty_kebab_case(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lower("lowercase", "buttontitle")]
    #[case::upper("UPPERCASE", "BUTTONTITLE")]
    #[case::pascal("PascalCase", "ButtonTitle")]
    #[case::camel("camelCase", "buttonTitle")]
    #[case::snake("snake_case", "button_title")]
    #[case::screaming_snake("SCREAMING_SNAKE_CASE", "BUTTON_TITLE")]
    #[case::kebab("kebab-case", "button-title")]
    #[case::screaming_kebab("SCREAMING-KEBAB-CASE", "BUTTON-TITLE")]
    fn rules_recase_variant_names(#[case] rule: &str, #[case] expected: &str) {
        let parsed = RenameRule::parse(rule, proc_macro2::Span::call_site())
            .expect("rule should be recognised");
        assert_eq!(parsed.apply("ButtonTitle"), expected);
    }

    #[test]
    fn unknown_rules_list_the_accepted_names() {
        let err = RenameRule::parse("Title Case", proc_macro2::Span::call_site())
            .expect_err("rule should be rejected");
        let message = err.to_string();
        assert!(message.contains("Title Case"));
        assert!(message.contains("kebab-case"));
    }
}

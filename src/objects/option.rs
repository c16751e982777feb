//! Option and option group objects
//!
//! The option type is named `SelectOption` so it does not shadow
//! `std::option::Option`; its component kind is still `"option"`.

use super::text::{Text, plain_text_only};
use crate::config::ValidationConfig;
use crate::core::error::ValidationError;
use crate::core::field::{FieldFormat, FieldType};
use crate::core::validation::{each, format, item_count, max_length, of_type, required};
use crate::core::{Component, ComponentDraft};
use crate::impl_component;

/// A single choice in a select menu, checkbox group or overflow menu
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption(Component);

impl_component!(SelectOption, "option");

impl SelectOption {
    pub const TEXT_MAX_LENGTH: usize = 75;
    pub const VALUE_MAX_LENGTH: usize = 75;
    pub const DESCRIPTION_MAX_LENGTH: usize = 75;
    pub const URL_MAX_LENGTH: usize = 3000;

    /// Start an option from its label and its submitted value
    pub fn builder(text: Text, value: impl Into<String>) -> SelectOptionBuilder {
        SelectOptionBuilder {
            text,
            value: value.into(),
            description: None,
            url: None,
        }
    }

    /// Create an option without description or url
    pub fn new(text: Text, value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::builder(text, value).create()
    }

    pub fn value(&self) -> &str {
        self.0.get_str("value").unwrap_or_default()
    }

    pub fn url(&self) -> Option<&str> {
        self.0.get_str("url")
    }
}

/// Builder for [`SelectOption`]
#[derive(Debug, Clone)]
pub struct SelectOptionBuilder {
    text: Text,
    value: String,
    description: Option<Text>,
    url: Option<String>,
}

impl SelectOptionBuilder {
    /// Plain text shown below the label
    pub fn description(mut self, description: Text) -> Self {
        self.description = Some(description);
        self
    }

    /// Link opened when the option is picked from an overflow menu
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn create(self) -> Result<SelectOption, ValidationError> {
        self.create_with(&ValidationConfig::default())
    }

    pub fn create_with(self, config: &ValidationConfig) -> Result<SelectOption, ValidationError> {
        let mut draft = ComponentDraft::with_config(SelectOption::KIND, config);
        draft
            .declare_field(
                "text",
                self.text,
                vec![
                    required(),
                    of_type(FieldType::Component(Text::KIND)),
                    max_length(SelectOption::TEXT_MAX_LENGTH),
                ],
            )
            .declare_field(
                "value",
                self.value,
                vec![required(), max_length(SelectOption::VALUE_MAX_LENGTH)],
            )
            .declare_field(
                "description",
                self.description,
                vec![
                    of_type(FieldType::Component(Text::KIND)),
                    plain_text_only(),
                    max_length(SelectOption::DESCRIPTION_MAX_LENGTH),
                ],
            )
            .declare_field(
                "url",
                self.url,
                vec![max_length(SelectOption::URL_MAX_LENGTH), format(FieldFormat::Url)],
            );

        draft.finish().map(SelectOption)
    }
}

/// A labelled group of options in a select menu
#[derive(Debug, Clone, PartialEq)]
pub struct OptionGroup(Component);

impl_component!(OptionGroup, "option_group");

impl OptionGroup {
    pub const LABEL_MAX_LENGTH: usize = 75;
    pub const MAX_OPTIONS: usize = 100;

    pub fn new(label: Text, options: Vec<SelectOption>) -> Result<Self, ValidationError> {
        Self::new_with(label, options, &ValidationConfig::default())
    }

    pub fn new_with(
        label: Text,
        options: Vec<SelectOption>,
        config: &ValidationConfig,
    ) -> Result<Self, ValidationError> {
        let mut draft = ComponentDraft::with_config(Self::KIND, config);
        draft
            .declare_field(
                "label",
                label,
                vec![
                    required(),
                    of_type(FieldType::Component(Text::KIND)),
                    plain_text_only(),
                    max_length(Self::LABEL_MAX_LENGTH),
                ],
            )
            .declare_field(
                "options",
                options,
                vec![
                    required(),
                    item_count(1, Self::MAX_OPTIONS),
                    each(of_type(FieldType::Component(SelectOption::KIND))),
                ],
            );

        draft.finish().map(OptionGroup)
    }

    pub fn option_count(&self) -> usize {
        self.0.get_list("options").map_or(0, <[_]>::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ViolationKind;
    use serde_json::json;

    fn option(text: &str, value: &str) -> SelectOption {
        SelectOption::new(Text::plain(text).unwrap(), value).unwrap()
    }

    #[test]
    fn test_builds_option() {
        let option = SelectOption::builder(Text::plain("text").unwrap(), "value")
            .description(Text::plain("description").unwrap())
            .url("https://example.com")
            .create()
            .unwrap();
        assert_eq!(
            option,
            json!({
                "text": { "type": "plain_text", "text": "text" },
                "value": "value",
                "description": { "type": "plain_text", "text": "description" },
                "url": "https://example.com",
            })
        );
        assert_eq!(option.value(), "value");
        assert_eq!(option.url(), Some("https://example.com"));
    }

    #[test]
    fn test_option_text_boundary() {
        assert!(SelectOption::new(Text::plain("t".repeat(75)).unwrap(), "value").is_ok());
        let err = SelectOption::new(Text::plain("t".repeat(76)).unwrap(), "value").unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].kind, ViolationKind::Range);
        assert_eq!(err.violations[0].field(), "text");
    }

    #[test]
    fn test_option_value_boundary() {
        let text = || Text::plain("text").unwrap();
        assert!(SelectOption::new(text(), "v".repeat(75)).is_ok());
        let err = SelectOption::new(text(), "v".repeat(76)).unwrap_err();
        assert_eq!(err.violations[0].field(), "value");
    }

    #[test]
    fn test_option_url_boundary() {
        let base = "https://example.com/";
        let text = || Text::plain("text").unwrap();
        let ok = format!("{}{}", base, "u".repeat(3000 - base.len()));
        let too_long = format!("{}{}", base, "u".repeat(3001 - base.len()));

        assert!(SelectOption::builder(text(), "v").url(ok).create().is_ok());
        let err = SelectOption::builder(text(), "v").url(too_long).create().unwrap_err();
        assert_eq!(err.first_kind(), Some(ViolationKind::Range));
    }

    #[test]
    fn test_option_url_format() {
        let err = SelectOption::builder(Text::plain("text").unwrap(), "v")
            .url("not a url")
            .create()
            .unwrap_err();
        assert_eq!(err.first_kind(), Some(ViolationKind::Format));
    }

    #[test]
    fn test_builds_option_group() {
        let group = OptionGroup::new(
            Text::plain("label").unwrap(),
            vec![option("option 1", "value_1"), option("option 2", "value_2")],
        )
        .unwrap();
        assert_eq!(
            group.build(),
            json!({
                "label": { "type": "plain_text", "text": "label" },
                "options": [
                    { "text": { "type": "plain_text", "text": "option 1" }, "value": "value_1" },
                    { "text": { "type": "plain_text", "text": "option 2" }, "value": "value_2" },
                ],
            })
        );
        assert_eq!(group.option_count(), 2);
    }

    #[test]
    fn test_option_group_bounds() {
        let label = || Text::plain("label").unwrap();
        let options = |n: usize| -> Vec<SelectOption> {
            (0..n).map(|i| option(&format!("option {}", i), "v")).collect()
        };

        assert!(OptionGroup::new(label(), options(100)).is_ok());

        let err = OptionGroup::new(label(), options(101)).unwrap_err();
        assert_eq!(err.first_kind(), Some(ViolationKind::Composition));

        let err = OptionGroup::new(label(), Vec::new()).unwrap_err();
        assert_eq!(err.first_kind(), Some(ViolationKind::Composition));
    }

    #[test]
    fn test_option_group_markdown_label_fails() {
        let err = OptionGroup::new(Text::markdown("*label*").unwrap(), vec![option("a", "b")])
            .unwrap_err();
        assert_eq!(err.violations[0].field(), "label");
    }
}

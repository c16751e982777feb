//! Confirmation dialog object

use super::text::{Text, plain_text_only};
use crate::config::ValidationConfig;
use crate::core::error::ValidationError;
use crate::core::field::FieldType;
use crate::core::validation::{max_length, of_type, one_of, required};
use crate::core::{Component, ComponentDraft};
use crate::impl_component;

/// A dialog asking the user to confirm an interactive action
#[derive(Debug, Clone, PartialEq)]
pub struct Confirm(Component);

impl_component!(Confirm, "confirm");

impl Confirm {
    pub const TITLE_MAX_LENGTH: usize = 100;
    pub const TEXT_MAX_LENGTH: usize = 300;
    pub const CONFIRM_MAX_LENGTH: usize = 30;
    pub const DENY_MAX_LENGTH: usize = 30;
    pub const STYLES: [&'static str; 2] = ["primary", "danger"];

    /// Start a dialog from its four mandatory texts
    pub fn builder(title: Text, text: Text, confirm: Text, deny: Text) -> ConfirmBuilder {
        ConfirmBuilder {
            title,
            text,
            confirm,
            deny,
            style: None,
        }
    }

    pub fn title(&self) -> Option<&Component> {
        self.0.get_component("title")
    }

    pub fn style(&self) -> Option<&str> {
        self.0.get_str("style")
    }
}

/// Builder for [`Confirm`]
#[derive(Debug, Clone)]
pub struct ConfirmBuilder {
    title: Text,
    text: Text,
    confirm: Text,
    deny: Text,
    style: Option<String>,
}

impl ConfirmBuilder {
    /// Color of the confirm button: `primary` or `danger`
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn create(self) -> Result<Confirm, ValidationError> {
        self.create_with(&ValidationConfig::default())
    }

    pub fn create_with(self, config: &ValidationConfig) -> Result<Confirm, ValidationError> {
        let text_type = || of_type(FieldType::Component(Text::KIND));

        let mut draft = ComponentDraft::with_config(Confirm::KIND, config);
        draft
            .declare_field(
                "title",
                self.title,
                vec![
                    required(),
                    text_type(),
                    plain_text_only(),
                    max_length(Confirm::TITLE_MAX_LENGTH),
                ],
            )
            .declare_field(
                "text",
                self.text,
                vec![required(), text_type(), max_length(Confirm::TEXT_MAX_LENGTH)],
            )
            .declare_field(
                "confirm",
                self.confirm,
                vec![
                    required(),
                    text_type(),
                    plain_text_only(),
                    max_length(Confirm::CONFIRM_MAX_LENGTH),
                ],
            )
            .declare_field(
                "deny",
                self.deny,
                vec![
                    required(),
                    text_type(),
                    plain_text_only(),
                    max_length(Confirm::DENY_MAX_LENGTH),
                ],
            )
            .declare_field("style", self.style, vec![one_of(&Confirm::STYLES)]);

        draft.finish().map(Confirm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ViolationKind;
    use serde_json::json;

    fn dialog(title: &str, text: &str, confirm: &str, deny: &str) -> ConfirmBuilder {
        Confirm::builder(
            Text::plain(title).unwrap(),
            Text::markdown(text).unwrap(),
            Text::plain(confirm).unwrap(),
            Text::plain(deny).unwrap(),
        )
    }

    #[test]
    fn test_builds_confirm() {
        let confirm = dialog("title", "*markdown* text", "confirm", "deny")
            .style("primary")
            .create()
            .unwrap();
        assert_eq!(
            confirm.build(),
            json!({
                "title": { "type": "plain_text", "text": "title" },
                "text": { "type": "mrkdwn", "text": "*markdown* text" },
                "confirm": { "type": "plain_text", "text": "confirm" },
                "deny": { "type": "plain_text", "text": "deny" },
                "style": "primary",
            })
        );
        assert_eq!(confirm.style(), Some("primary"));
    }

    #[test]
    fn test_style_is_optional() {
        let confirm = dialog("t", "x", "c", "d").create().unwrap();
        assert!(confirm.build().get("style").is_none());
        assert_eq!(confirm.style(), None);
    }

    #[test]
    fn test_title_boundary() {
        assert!(dialog(&"t".repeat(100), "x", "c", "d").create().is_ok());
        let err = dialog(&"t".repeat(101), "x", "c", "d").create().unwrap_err();
        assert_eq!(err.violations[0].kind, ViolationKind::Range);
        assert_eq!(err.violations[0].field(), "title");
    }

    #[test]
    fn test_disallowed_style_fails() {
        let err = dialog("t", "x", "c", "d").style("secondary").create().unwrap_err();
        assert_eq!(err.first_kind(), Some(ViolationKind::Choice));
    }

    #[test]
    fn test_markdown_title_fails() {
        let err = Confirm::builder(
            Text::markdown("*title*").unwrap(),
            Text::markdown("x").unwrap(),
            Text::plain("c").unwrap(),
            Text::plain("d").unwrap(),
        )
        .create()
        .unwrap_err();
        assert_eq!(err.first_kind(), Some(ViolationKind::Type));
        assert_eq!(err.violations[0].field(), "title");
    }

    #[test]
    fn test_all_violations_reported_together() {
        let err = dialog(&"t".repeat(101), &"m".repeat(301), &"c".repeat(31), "d")
            .style("secondary")
            .create()
            .unwrap_err();
        let fields: Vec<&str> = err.violations.iter().map(|v| v.field()).collect();
        assert_eq!(fields, vec!["title", "text", "confirm", "style"]);
    }

    #[test]
    fn test_fail_fast_reports_only_first() {
        let err = dialog(&"t".repeat(101), &"m".repeat(301), "c", "d")
            .create_with(&ValidationConfig::fail_fast())
            .unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field(), "title");
    }
}

//! Text composition object

use crate::config::ValidationConfig;
use crate::core::error::{ValidationError, Violation};
use crate::core::field::{FieldType, FieldValue};
use crate::core::validation::{FieldValidator, of_type, one_of, required, string_length};
use crate::core::{Component, ComponentDraft};
use crate::impl_component;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Formatting of a text object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextType {
    #[serde(rename = "plain_text")]
    Plain,
    #[default]
    #[serde(rename = "mrkdwn")]
    Markdown,
}

impl TextType {
    pub const PLAIN: &'static str = "plain_text";
    pub const MARKDOWN: &'static str = "mrkdwn";

    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            TextType::Plain => Self::PLAIN,
            TextType::Markdown => Self::MARKDOWN,
        }
    }
}

/// A text object, either plain text or markdown
///
/// ```rust,ignore
/// let text = Text::builder("*markdown* text").verbatim(true).create()?;
/// assert_eq!(text.build(), json!({
///     "type": "mrkdwn",
///     "text": "*markdown* text",
///     "verbatim": true,
/// }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text(Component);

impl_component!(Text, "text");

impl Text {
    pub const MAX_LENGTH: usize = 3000;

    /// Start a text object; the type defaults to markdown
    pub fn builder(text: impl Into<String>) -> TextBuilder {
        TextBuilder {
            text: text.into(),
            text_type: TextType::default(),
            emoji: None,
            verbatim: None,
        }
    }

    /// Create a text object of the given type
    pub fn new(text: impl Into<String>, text_type: TextType) -> Result<Self, ValidationError> {
        Self::builder(text).text_type(text_type).create()
    }

    /// Create a plain text object
    pub fn plain(text: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(text, TextType::Plain)
    }

    /// Create a markdown text object
    pub fn markdown(text: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(text, TextType::Markdown)
    }

    pub fn text(&self) -> &str {
        self.0.get_str("text").unwrap_or_default()
    }

    pub fn text_type(&self) -> TextType {
        match self.0.get_str("type") {
            Some(TextType::PLAIN) => TextType::Plain,
            _ => TextType::Markdown,
        }
    }

    pub fn emoji(&self) -> Option<bool> {
        self.0.get_bool("emoji")
    }

    pub fn verbatim(&self) -> Option<bool> {
        self.0.get_bool("verbatim")
    }
}

/// Builder for [`Text`]
#[derive(Debug, Clone)]
pub struct TextBuilder {
    text: String,
    text_type: TextType,
    emoji: Option<bool>,
    verbatim: Option<bool>,
}

impl TextBuilder {
    pub fn text_type(mut self, text_type: TextType) -> Self {
        self.text_type = text_type;
        self
    }

    pub fn plain(self) -> Self {
        self.text_type(TextType::Plain)
    }

    pub fn markdown(self) -> Self {
        self.text_type(TextType::Markdown)
    }

    /// Render emoji shortcodes; only allowed on plain text
    pub fn emoji(mut self, emoji: bool) -> Self {
        self.emoji = Some(emoji);
        self
    }

    /// Skip automatic link and mention parsing
    pub fn verbatim(mut self, verbatim: bool) -> Self {
        self.verbatim = Some(verbatim);
        self
    }

    pub fn create(self) -> Result<Text, ValidationError> {
        self.create_with(&ValidationConfig::default())
    }

    pub fn create_with(self, config: &ValidationConfig) -> Result<Text, ValidationError> {
        let mut draft = ComponentDraft::with_config(Text::KIND, config);
        draft
            .declare_field(
                "type",
                self.text_type.as_str(),
                vec![required(), one_of(&[TextType::PLAIN, TextType::MARKDOWN])],
            )
            .declare_field(
                "text",
                self.text,
                vec![required(), string_length(1, Text::MAX_LENGTH)],
            )
            .declare_field("emoji", self.emoji, vec![of_type(FieldType::Boolean)])
            .declare_field("verbatim", self.verbatim, vec![of_type(FieldType::Boolean)]);

        draft.cross_check(Arc::new(|text: &Component| {
            if text.get_str("type") == Some(TextType::MARKDOWN)
                && text.get_bool("emoji") == Some(true)
            {
                Err(Violation::cross_field(
                    ["type", "emoji"],
                    format!("'emoji' is usable only when 'type' is {}", TextType::PLAIN),
                ))
            } else {
                Ok(())
            }
        }));

        draft.finish().map(Text)
    }
}

/// Validator: value must be a plain text object
///
/// Used by objects whose text slots do not accept markdown.
pub fn plain_text_only() -> FieldValidator {
    Arc::new(|field: &str, value: &FieldValue| {
        let Some(component) = value.as_component() else {
            return Ok(());
        };
        if component.kind() == Text::KIND && component.get_str("type") == Some(TextType::PLAIN) {
            Ok(())
        } else {
            Err(Violation::type_mismatch(
                field,
                format!("'{}' must be a {} text object", field, TextType::PLAIN),
            ))
        }
    })
}

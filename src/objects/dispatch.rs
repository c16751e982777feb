//! Dispatch action configuration

use crate::config::ValidationConfig;
use crate::core::error::ValidationError;
use crate::core::validation::{each, item_count, one_of, required, unique_items};
use crate::core::{Component, ComponentDraft};
use crate::impl_component;

/// Interactions that make a plain-text input dispatch a `block_actions` payload
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchActionConfig(Component);

impl_component!(DispatchActionConfig, "dispatch_action_config");

impl DispatchActionConfig {
    pub const ON_ENTER_PRESSED: &'static str = "on_enter_pressed";
    pub const ON_CHARACTER_ENTERED: &'static str = "on_character_entered";
    pub const TRIGGERS: [&'static str; 2] = [Self::ON_ENTER_PRESSED, Self::ON_CHARACTER_ENTERED];

    pub fn new<I, S>(trigger_actions_on: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new_with(trigger_actions_on, &ValidationConfig::default())
    }

    pub fn new_with<I, S>(
        trigger_actions_on: I,
        config: &ValidationConfig,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let triggers: Vec<String> = trigger_actions_on.into_iter().map(Into::into).collect();

        let mut draft = ComponentDraft::with_config(Self::KIND, config);
        draft.declare_field(
            "trigger_actions_on",
            triggers,
            vec![
                required(),
                item_count(1, Self::TRIGGERS.len()),
                each(one_of(&Self::TRIGGERS)),
                unique_items(),
            ],
        );

        draft.finish().map(DispatchActionConfig)
    }

    pub fn triggers(&self) -> Vec<&str> {
        self.0
            .get_list("trigger_actions_on")
            .unwrap_or_default()
            .iter()
            .filter_map(|t| t.as_str())
            .collect()
    }
}

//! Conversation filter object

use crate::config::ValidationConfig;
use crate::core::error::ValidationError;
use crate::core::field::FieldType;
use crate::core::validation::{
    at_least_one_of, each, item_count, of_type, one_of, unique_items,
};
use crate::core::{Component, ComponentDraft};
use crate::impl_component;

/// Narrows the conversations listed by a conversation select menu
///
/// At least one of `include`, `exclude_external_shared_channels` and
/// `exclude_bot_users` must be set.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter(Component);

impl_component!(Filter, "filter");

impl Filter {
    pub const CONVERSATION_TYPES: [&'static str; 4] = ["im", "mpim", "private", "public"];

    pub fn builder() -> FilterBuilder {
        FilterBuilder::default()
    }

    pub fn include(&self) -> Vec<&str> {
        self.0
            .get_list("include")
            .unwrap_or_default()
            .iter()
            .filter_map(|t| t.as_str())
            .collect()
    }

    pub fn exclude_external_shared_channels(&self) -> Option<bool> {
        self.0.get_bool("exclude_external_shared_channels")
    }

    pub fn exclude_bot_users(&self) -> Option<bool> {
        self.0.get_bool("exclude_bot_users")
    }
}

/// Builder for [`Filter`]
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    include: Option<Vec<String>>,
    exclude_external_shared_channels: Option<bool>,
    exclude_bot_users: Option<bool>,
}

impl FilterBuilder {
    /// Conversation types to list: `im`, `mpim`, `private`, `public`
    pub fn include<I, S>(mut self, include: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = Some(include.into_iter().map(Into::into).collect());
        self
    }

    pub fn exclude_external_shared_channels(mut self, exclude: bool) -> Self {
        self.exclude_external_shared_channels = Some(exclude);
        self
    }

    pub fn exclude_bot_users(mut self, exclude: bool) -> Self {
        self.exclude_bot_users = Some(exclude);
        self
    }

    pub fn create(self) -> Result<Filter, ValidationError> {
        self.create_with(&ValidationConfig::default())
    }

    pub fn create_with(self, config: &ValidationConfig) -> Result<Filter, ValidationError> {
        let mut draft = ComponentDraft::with_config(Filter::KIND, config);
        draft
            .declare_field(
                "include",
                self.include,
                vec![
                    item_count(1, Filter::CONVERSATION_TYPES.len()),
                    each(one_of(&Filter::CONVERSATION_TYPES)),
                    unique_items(),
                ],
            )
            .declare_field(
                "exclude_external_shared_channels",
                self.exclude_external_shared_channels,
                vec![of_type(FieldType::Boolean)],
            )
            .declare_field(
                "exclude_bot_users",
                self.exclude_bot_users,
                vec![of_type(FieldType::Boolean)],
            );

        draft.cross_check(at_least_one_of(&[
            "include",
            "exclude_external_shared_channels",
            "exclude_bot_users",
        ]));

        draft.finish().map(Filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ViolationKind;
    use serde_json::json;

    #[test]
    fn test_builds_filter() {
        let filter = Filter::builder()
            .include(["im", "mpim", "private", "public"])
            .exclude_external_shared_channels(false)
            .exclude_bot_users(false)
            .create()
            .unwrap();
        assert_eq!(
            filter.build(),
            json!({
                "include": ["im", "mpim", "private", "public"],
                "exclude_external_shared_channels": false,
                "exclude_bot_users": false,
            })
        );
        assert_eq!(filter.exclude_bot_users(), Some(false));
    }

    #[test]
    fn test_empty_filter_fails() {
        let err = Filter::builder().create().unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].kind, ViolationKind::Required);
        assert_eq!(err.violations[0].fields.len(), 3);
    }

    #[test]
    fn test_single_constraint_is_enough() {
        let filter = Filter::builder().exclude_bot_users(true).create().unwrap();
        assert_eq!(filter, json!({ "exclude_bot_users": true }));
        assert!(filter.include().is_empty());
    }

    #[test]
    fn test_incorrect_include_fails() {
        let err = Filter::builder().include(["group"]).create().unwrap_err();
        assert_eq!(err.first_kind(), Some(ViolationKind::Choice));
        assert_eq!(err.violations[0].field(), "include[0]");
    }

    #[test]
    fn test_empty_include_fails() {
        let err = Filter::builder()
            .include(Vec::<String>::new())
            .create()
            .unwrap_err();
        assert_eq!(err.first_kind(), Some(ViolationKind::Composition));
    }

    #[test]
    fn test_include_accessor() {
        let filter = Filter::builder().include(["im", "public"]).create().unwrap();
        assert_eq!(filter.include(), vec!["im", "public"]);
    }
}

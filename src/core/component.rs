//! Component base abstraction
//!
//! A [`ComponentDraft`] collects field declarations and validates each one as
//! it is declared. [`ComponentDraft::finish`] runs the cross-field checks and
//! either hands back an immutable [`Component`] or a [`ValidationError`]; a
//! half-valid component is never observable.
//!
//! ```rust,ignore
//! use blockkit::core::component::ComponentDraft;
//! use blockkit::core::validation::*;
//!
//! let mut draft = ComponentDraft::new("option");
//! draft.declare_field("value", "v1", vec![required(), max_length(75)]);
//! draft.declare_field("url", None::<String>, vec![max_length(3000)]);
//! let option = draft.finish()?;
//!
//! assert_eq!(option.build(), serde_json::json!({ "value": "v1" }));
//! ```

use super::error::{ValidationError, Violation};
use super::field::FieldValue;
use super::validation::{ComponentValidator, FieldValidator};
use crate::config::{ValidationConfig, ValidationMode};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A validated, immutable component
///
/// Fields keep their declaration order, which is also the key order of
/// [`build`](Component::build).
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    kind: &'static str,
    fields: IndexMap<String, FieldValue>,
}

impl Component {
    /// Type name of the component, e.g. `"text"`
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Value of a field, `None` when absent or never declared
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).filter(|value| !value.is_absent())
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(FieldValue::as_bool)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(FieldValue::as_i64)
    }

    pub fn get_component(&self, name: &str) -> Option<&Component> {
        self.get(name).and_then(FieldValue::as_component)
    }

    pub fn get_list(&self, name: &str) -> Option<&[FieldValue]> {
        self.get(name).and_then(FieldValue::as_list)
    }

    /// Whether a field with this name was declared, present or not
    pub fn is_declared(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Declared field names, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Serialize into a plain JSON object
    ///
    /// Absent fields are omitted, nested components are built recursively
    /// and lists are serialized item by item.
    pub fn build(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.fields {
            if let Some(json) = value.to_json() {
                map.insert(name.clone(), json);
            }
        }
        Value::Object(map)
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.build().serialize(serializer)
    }
}

impl PartialEq<Value> for Component {
    fn eq(&self, other: &Value) -> bool {
        self.build() == *other
    }
}

impl PartialEq<Component> for Value {
    fn eq(&self, other: &Component) -> bool {
        *self == other.build()
    }
}

/// A component under construction
///
/// Each [`declare_field`](ComponentDraft::declare_field) call validates the
/// field immediately, in declaration order. Cross-field validators registered
/// with [`cross_check`](ComponentDraft::cross_check) run in
/// [`finish`](ComponentDraft::finish).
pub struct ComponentDraft {
    component: Component,
    cross_checks: Vec<ComponentValidator>,
    violations: Vec<Violation>,
    mode: ValidationMode,
}

impl ComponentDraft {
    /// Start a component with the default configuration
    pub fn new(kind: &'static str) -> Self {
        Self::with_config(kind, &ValidationConfig::default())
    }

    /// Start a component with an explicit configuration
    pub fn with_config(kind: &'static str, config: &ValidationConfig) -> Self {
        Self {
            component: Component {
                kind,
                fields: IndexMap::new(),
            },
            cross_checks: Vec::new(),
            violations: Vec::new(),
            mode: config.mode,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.component.kind
    }

    /// Declare a field and run its validators
    ///
    /// Validators run in order and stop at the first failure for this field.
    /// In fail-fast mode nothing is validated once a violation is recorded.
    pub fn declare_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
        validators: Vec<FieldValidator>,
    ) -> &mut Self {
        let value = value.into();
        tracing::trace!(
            component = self.kind(),
            field = name,
            value_type = value.type_name(),
            "declaring field"
        );

        if self.component.fields.contains_key(name) {
            self.record(Violation::composition(
                name,
                format!("'{}' is declared more than once", name),
            ));
            return self;
        }

        if !self.halted() {
            if let Err(violation) = Self::check_field(name, &value, &validators) {
                self.record(violation);
            }
        }

        self.component.fields.insert(name.to_string(), value);
        self
    }

    /// Register a validator that runs after all fields are declared
    pub fn cross_check(&mut self, validator: ComponentValidator) -> &mut Self {
        self.cross_checks.push(validator);
        self
    }

    /// Attribute lookup on the component under construction
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.component.get(name)
    }

    /// Violations recorded so far
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Run cross-field validators and seal the component
    pub fn finish(mut self) -> Result<Component, ValidationError> {
        for check in std::mem::take(&mut self.cross_checks) {
            if self.halted() {
                break;
            }
            if let Err(violation) = check(&self.component) {
                self.record(violation);
            }
        }

        if self.violations.is_empty() {
            tracing::debug!(
                component = self.kind(),
                fields = self.component.fields.len(),
                "component built"
            );
            Ok(self.component)
        } else {
            tracing::debug!(
                component = self.kind(),
                violations = self.violations.len(),
                "component construction failed"
            );
            Err(ValidationError::new(self.component.kind, self.violations))
        }
    }

    fn check_field(
        name: &str,
        value: &FieldValue,
        validators: &[FieldValidator],
    ) -> Result<(), Violation> {
        Self::check_shape(name, value)?;
        validators.iter().try_for_each(|validator| validator(name, value))
    }

    /// Reject values `build()` could not serialize one-to-one
    ///
    /// Lists are walked recursively; list items may not be absent and floats
    /// must be finite at any depth.
    fn check_shape(name: &str, value: &FieldValue) -> Result<(), Violation> {
        match value {
            FieldValue::Float(f) if !f.is_finite() => Err(Violation::type_mismatch(
                name,
                format!("'{}' must be a finite number (got {})", name, f),
            )),
            FieldValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_name = format!("{}[{}]", name, index);
                    if item.is_absent() {
                        return Err(Violation::composition(
                            &item_name,
                            format!("'{}' must not be absent", item_name),
                        ));
                    }
                    Self::check_shape(&item_name, item)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn record(&mut self, violation: Violation) {
        if self.halted() {
            return;
        }
        tracing::debug!(
            component = self.kind(),
            kind = %violation.kind,
            fields = ?violation.fields,
            "{}",
            violation.message
        );
        self.violations.push(violation);
    }

    fn halted(&self) -> bool {
        self.mode == ValidationMode::FailFast && !self.violations.is_empty()
    }
}

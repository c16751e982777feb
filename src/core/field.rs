//! Field value types

use super::component::Component;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// Value held by a declared field
///
/// `Absent` marks an unset optional field. It is distinct from `false`,
/// `0` and the empty string, and is dropped from serialized output.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Absent,
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Component(Box<Component>),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Check if the value is absent
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Get the value as a string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_component(&self) -> Option<&Component> {
        match self {
            FieldValue::Component(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the runtime type, used in violation messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Absent => "absent",
            FieldValue::String(_) => "string",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Component(_) => "component",
            FieldValue::List(_) => "list",
        }
    }

    /// Serialize to plain JSON, `None` when absent
    ///
    /// Nested components are built recursively and lists keep one entry per
    /// item. Absent list items and non-finite floats are rejected at
    /// declaration time; should an unvalidated value reach this point they
    /// become `null` inside a list.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            FieldValue::Absent => None,
            FieldValue::String(s) => Some(Value::String(s.clone())),
            FieldValue::Integer(i) => Some(Value::from(*i)),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f).map(Value::Number),
            FieldValue::Boolean(b) => Some(Value::Bool(*b)),
            FieldValue::Component(c) => Some(c.build()),
            FieldValue::List(items) => Some(Value::Array(
                items
                    .iter()
                    .map(|item| item.to_json().unwrap_or(Value::Null))
                    .collect(),
            )),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<Component> for FieldValue {
    fn from(value: Component) -> Self {
        FieldValue::Component(Box::new(value))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Absent, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(value: Vec<T>) -> Self {
        FieldValue::List(value.into_iter().map(Into::into).collect())
    }
}

/// Expected type of a field, checked by [`of_type`](super::validation::validators::of_type)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    /// Any finite number, integers included
    Number,
    Boolean,
    /// A nested component of the given kind
    Component(&'static str),
    /// A nested component of any kind
    AnyComponent,
    List,
}

impl FieldType {
    /// Whether a present value matches this type
    pub fn matches(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (FieldType::String, FieldValue::String(_)) => true,
            (FieldType::Integer, FieldValue::Integer(_)) => true,
            (FieldType::Number, FieldValue::Integer(_) | FieldValue::Float(_)) => true,
            (FieldType::Boolean, FieldValue::Boolean(_)) => true,
            (FieldType::Component(kind), FieldValue::Component(c)) => c.kind() == *kind,
            (FieldType::AnyComponent, FieldValue::Component(_)) => true,
            (FieldType::List, FieldValue::List(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Integer => f.write_str("integer"),
            FieldType::Number => f.write_str("number"),
            FieldType::Boolean => f.write_str("boolean"),
            FieldType::Component(kind) => write!(f, "{} component", kind),
            FieldType::AnyComponent => f.write_str("component"),
            FieldType::List => f.write_str("list"),
        }
    }
}

/// String formats checked by [`format`](super::validation::validators::format)
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Url,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a string against this format
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            FieldFormat::Url => Self::is_valid_url(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_url(url: &str) -> bool {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
        regex.is_match(url)
    }
}

impl fmt::Display for FieldFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldFormat::Url => f.write_str("an http(s) URL"),
            FieldFormat::Custom(regex) => write!(f, "pattern '{}'", regex.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_is_default_and_distinct_from_falsy() {
        assert!(FieldValue::default().is_absent());
        assert!(!FieldValue::Boolean(false).is_absent());
        assert!(!FieldValue::Integer(0).is_absent());
        assert!(!FieldValue::String(String::new()).is_absent());
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<bool> = None;
        assert_eq!(FieldValue::from(none), FieldValue::Absent);
        assert_eq!(FieldValue::from(Some(false)), FieldValue::Boolean(false));
        assert_eq!(FieldValue::from(Some("x")), FieldValue::String("x".into()));
    }

    #[test]
    fn test_vec_conversion() {
        let value = FieldValue::from(vec!["im", "mpim"]);
        assert_eq!(
            value,
            FieldValue::List(vec![
                FieldValue::String("im".into()),
                FieldValue::String("mpim".into())
            ])
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(FieldValue::from("a").as_str(), Some("a"));
        assert_eq!(FieldValue::from(3_i64).as_i64(), Some(3));
        assert_eq!(FieldValue::from(3_i64).as_f64(), Some(3.0));
        assert_eq!(FieldValue::from(true).as_bool(), Some(true));
        assert_eq!(FieldValue::from(true).as_str(), None);
        assert!(FieldValue::from(vec![1_i64]).as_list().is_some());
    }

    #[test]
    fn test_to_json_scalars() {
        assert_eq!(FieldValue::Absent.to_json(), None);
        assert_eq!(FieldValue::from("a").to_json(), Some(json!("a")));
        assert_eq!(FieldValue::from(42_i64).to_json(), Some(json!(42)));
        assert_eq!(FieldValue::from(1.5).to_json(), Some(json!(1.5)));
        assert_eq!(FieldValue::from(false).to_json(), Some(json!(false)));
    }

    #[test]
    fn test_to_json_list_keeps_every_item() {
        let value = FieldValue::List(vec![
            FieldValue::from("a"),
            FieldValue::Absent,
            FieldValue::from(f64::NAN),
            FieldValue::from(true),
        ]);
        assert_eq!(value.to_json(), Some(json!(["a", null, null, true])));
    }

    #[test]
    fn test_field_type_matches() {
        assert!(FieldType::String.matches(&FieldValue::from("x")));
        assert!(!FieldType::String.matches(&FieldValue::from(1_i64)));
        assert!(FieldType::Number.matches(&FieldValue::from(1_i64)));
        assert!(FieldType::Number.matches(&FieldValue::from(1.5)));
        assert!(!FieldType::Integer.matches(&FieldValue::from(1.5)));
        assert!(FieldType::Boolean.matches(&FieldValue::from(false)));
        assert!(FieldType::List.matches(&FieldValue::from(vec![true])));
        assert!(!FieldType::AnyComponent.matches(&FieldValue::from("x")));
    }

    #[test]
    fn test_url_format() {
        let format = FieldFormat::Url;
        assert!(format.is_match("https://example.com"));
        assert!(format.is_match("http://test.com/path?query=1"));
        assert!(!format.is_match("not a url"));
        assert!(!format.is_match("ftp://example.com"));
    }

    #[test]
    fn test_custom_format() {
        let format = FieldFormat::Custom(Regex::new(r"^[a-z_]+$").unwrap());
        assert!(format.is_match("on_enter_pressed"));
        assert!(!format.is_match("On Enter"));
        assert_eq!(format.to_string(), "pattern '^[a-z_]+$'");
    }
}

//! Reusable field validators
//!
//! Every validator except [`required`] lets an absent value through, so
//! constraints only fire once a value is supplied.

use super::FieldValidator;
use crate::core::error::Violation;
use crate::core::field::{FieldFormat, FieldType, FieldValue};
use std::sync::Arc;

/// Validator: field must be present
pub fn required() -> FieldValidator {
    Arc::new(|field: &str, value: &FieldValue| {
        if value.is_absent() {
            Err(Violation::required(field, format!("'{}' is required", field)))
        } else {
            Ok(())
        }
    })
}

/// Validator: value must have the expected type
pub fn of_type(expected: FieldType) -> FieldValidator {
    Arc::new(move |field: &str, value: &FieldValue| {
        if value.is_absent() || expected.matches(value) {
            return Ok(());
        }
        let actual = match value {
            FieldValue::Component(c) => format!("{} component", c.kind()),
            other => other.type_name().to_string(),
        };
        Err(Violation::type_mismatch(
            field,
            format!("'{}' must be a {} (got {})", field, expected, actual),
        ))
    })
}

/// Validator: string value must be one of the allowed choices
pub fn one_of(allowed: &[&str]) -> FieldValidator {
    let allowed: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
    Arc::new(move |field: &str, value: &FieldValue| match value {
        FieldValue::Absent => Ok(()),
        FieldValue::String(s) if allowed.iter().any(|a| a == s) => Ok(()),
        FieldValue::String(s) => Err(Violation::choice(
            field,
            format!("'{}' must be one of {:?} (got '{}')", field, allowed, s),
        )),
        other => Err(Violation::type_mismatch(
            field,
            format!("'{}' must be a string choice (got {})", field, other.type_name()),
        )),
    })
}

/// Validator: string length, in characters, must be within `[min, max]`
///
/// A text component is measured by its `text` attribute, so a parent can
/// bound the text of a nested text object.
pub fn string_length(min: usize, max: usize) -> FieldValidator {
    Arc::new(move |field: &str, value: &FieldValue| {
        let text = match value {
            FieldValue::String(s) => s.as_str(),
            FieldValue::Component(c) => match c.get_str("text") {
                Some(s) => s,
                None => return Ok(()),
            },
            _ => return Ok(()),
        };

        let len = text.chars().count();
        if len < min {
            Err(Violation::range(
                field,
                format!("'{}' must be at least {} characters (got {})", field, min, len),
            ))
        } else if len > max {
            Err(Violation::range(
                field,
                format!("'{}' must be at most {} characters (got {})", field, max, len),
            ))
        } else {
            Ok(())
        }
    })
}

/// Validator: string length must not exceed `max` characters
pub fn max_length(max: usize) -> FieldValidator {
    string_length(0, max)
}

/// Validator: number must be within `[min, max]`
pub fn number_range(min: f64, max: f64) -> FieldValidator {
    Arc::new(move |field: &str, value: &FieldValue| {
        let Some(num) = value.as_f64() else {
            return Ok(());
        };
        if num < min || num > max {
            Err(Violation::range(
                field,
                format!("'{}' must be between {} and {} (got {})", field, min, max, num),
            ))
        } else {
            Ok(())
        }
    })
}

/// Validator: list must hold between `min` and `max` items
pub fn item_count(min: usize, max: usize) -> FieldValidator {
    Arc::new(move |field: &str, value: &FieldValue| {
        let Some(items) = value.as_list() else {
            return Ok(());
        };
        let count = items.len();
        if count < min {
            Err(Violation::composition(
                field,
                format!("'{}' must contain at least {} items (got {})", field, min, count),
            ))
        } else if count > max {
            Err(Violation::composition(
                field,
                format!("'{}' must contain at most {} items (got {})", field, max, count),
            ))
        } else {
            Ok(())
        }
    })
}

/// Validator: list items must be distinct
pub fn unique_items() -> FieldValidator {
    Arc::new(|field: &str, value: &FieldValue| {
        let Some(items) = value.as_list() else {
            return Ok(());
        };
        for (index, item) in items.iter().enumerate() {
            if items[..index].contains(item) {
                return Err(Violation::composition(
                    field,
                    format!("'{}' contains a duplicate item at index {}", field, index),
                ));
            }
        }
        Ok(())
    })
}

/// Validator: apply `inner` to every item of a list
///
/// Violations are reported against `field[index]`.
pub fn each(inner: FieldValidator) -> FieldValidator {
    Arc::new(move |field: &str, value: &FieldValue| {
        let Some(items) = value.as_list() else {
            return Ok(());
        };
        for (index, item) in items.iter().enumerate() {
            inner(&format!("{}[{}]", field, index), item)?;
        }
        Ok(())
    })
}

/// Validator: string must match the given format
pub fn format(expected: FieldFormat) -> FieldValidator {
    Arc::new(move |field: &str, value: &FieldValue| {
        let Some(s) = value.as_str() else {
            return Ok(());
        };
        if expected.is_match(s) {
            Ok(())
        } else {
            Err(Violation::format(
                field,
                format!("'{}' must be {} (got '{}')", field, expected, s),
            ))
        }
    })
}

//! Validation system
//!
//! Validators are plain functions stored as shared trait objects. Field
//! validators look at one value; component validators look at the whole
//! component under construction and enforce rules spanning several fields.

pub mod cross_field;
pub mod validators;

use super::component::Component;
use super::error::Violation;
use super::field::FieldValue;
use std::sync::Arc;

/// Checks a single field value; receives the field name for error reporting
pub type FieldValidator = Arc<dyn Fn(&str, &FieldValue) -> Result<(), Violation> + Send + Sync>;

/// Checks a component after all of its fields are declared
pub type ComponentValidator = Arc<dyn Fn(&Component) -> Result<(), Violation> + Send + Sync>;

pub use cross_field::{at_least_one_of, mutually_exclusive};
pub use validators::{
    each, format, item_count, max_length, number_range, of_type, one_of, required,
    string_length, unique_items,
};

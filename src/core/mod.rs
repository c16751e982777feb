//! Core module: fields, components, validators and errors

pub mod component;
pub mod error;
pub mod field;
pub mod validation;

pub use component::{Component, ComponentDraft};
pub use error::{ValidationError, Violation, ViolationKind};
pub use field::{FieldFormat, FieldType, FieldValue};
pub use validation::{ComponentValidator, FieldValidator};

//! Typed validation errors
//!
//! Every constraint failure is reported as a [`Violation`] carrying a
//! [`ViolationKind`], the field(s) involved and a human-readable message.
//! Construction of a component collects violations into a single
//! [`ValidationError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use blockkit::prelude::*;
//!
//! match Text::plain("") {
//!     Ok(text) => println!("{}", text.build()),
//!     Err(err) if err.has_kind(ViolationKind::Range) => {
//!         for violation in err.violations_for("text") {
//!             eprintln!("{}", violation);
//!         }
//!     }
//!     Err(err) => eprintln!("{}", err),
//! }
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Violations
// =============================================================================

/// Category of a broken constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Value has the wrong type for the field
    Type,

    /// Value is not one of the allowed choices
    Choice,

    /// Length or numeric value outside of its bounds
    Range,

    /// A mandatory value is missing
    Required,

    /// An invariant spanning several fields is broken
    CrossField,

    /// A nested list or component is malformed (too few/many items, duplicates)
    Composition,

    /// A string does not match its expected format
    Format,
}

impl ViolationKind {
    /// Stable code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::Type => "TYPE_VIOLATION",
            ViolationKind::Choice => "CHOICE_VIOLATION",
            ViolationKind::Range => "RANGE_VIOLATION",
            ViolationKind::Required => "REQUIRED_VIOLATION",
            ViolationKind::CrossField => "CROSS_FIELD_VIOLATION",
            ViolationKind::Composition => "COMPOSITION_VIOLATION",
            ViolationKind::Format => "FORMAT_VIOLATION",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViolationKind::Type => "type",
            ViolationKind::Choice => "choice",
            ViolationKind::Range => "range",
            ViolationKind::Required => "required",
            ViolationKind::CrossField => "cross-field",
            ViolationKind::Composition => "composition",
            ViolationKind::Format => "format",
        };
        f.write_str(name)
    }
}

/// A single broken constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Offending field names; cross-field violations name every field involved
    pub fields: Vec<String>,
    pub message: String,
}

impl Violation {
    /// Create a violation on a single field
    pub fn new(kind: ViolationKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            fields: vec![field.into()],
            message: message.into(),
        }
    }

    pub fn type_mismatch(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Type, field, message)
    }

    pub fn choice(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Choice, field, message)
    }

    pub fn range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Range, field, message)
    }

    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Required, field, message)
    }

    pub fn composition(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Composition, field, message)
    }

    pub fn format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::Format, field, message)
    }

    /// Create a violation spanning several fields
    pub fn spanning<I, S>(kind: ViolationKind, fields: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            fields: fields.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Create a cross-field violation naming every offending field
    pub fn cross_field<I, S>(fields: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::spanning(ViolationKind::CrossField, fields, message)
    }

    /// First field named by this violation
    pub fn field(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    /// Whether this violation names the given field
    pub fn concerns(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]: {}",
            self.fields.join(", "),
            self.kind,
            self.message
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Construction of a component failed
///
/// Holds every violation found (or only the first one in fail-fast mode).
/// It is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {component}: {}", join_violations(.violations))]
pub struct ValidationError {
    /// Kind of the component that failed, e.g. `"option"`
    pub component: String,
    pub violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new(component: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self {
            component: component.into(),
            violations,
        }
    }

    /// Whether any violation has the given kind
    pub fn has_kind(&self, kind: ViolationKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    /// Violations naming the given field
    pub fn violations_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.concerns(field))
    }

    /// Kind of the first violation
    pub fn first_kind(&self) -> Option<ViolationKind> {
        self.violations.first().map(|v| v.kind)
    }

    /// Structured details, suitable for returning to a caller as JSON
    pub fn details(&self) -> serde_json::Value {
        let violations: Vec<serde_json::Value> = self
            .violations
            .iter()
            .map(|v| {
                serde_json::json!({
                    "code": v.kind.code(),
                    "kind": v.kind,
                    "fields": v.fields,
                    "message": v.message,
                })
            })
            .collect();

        serde_json::json!({
            "component": self.component,
            "violations": violations,
        })
    }
}

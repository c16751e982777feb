//! # blockkit
//!
//! A declarative builder for Slack Block Kit payloads.
//!
//! ## Features
//!
//! - **Component/Field Architecture**: every object is a component made of declared fields
//! - **Eager Validation**: type, length, choice and cross-field rules run at construction
//! - **Aggregated Errors**: all violations are reported at once (or fail-fast, via config)
//! - **Plain Output**: `build()` yields a `serde_json::Value`, absent fields omitted
//! - **Immutable Objects**: a constructed object is always valid
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blockkit::prelude::*;
//!
//! let confirm = Confirm::builder(
//!     Text::plain("Are you sure?")?,
//!     Text::markdown("This will *delete* the channel.")?,
//!     Text::plain("Delete")?,
//!     Text::plain("Cancel")?,
//! )
//! .style("danger")
//! .create()?;
//!
//! let payload = confirm.build();
//! assert_eq!(payload["style"], "danger");
//! ```

pub mod config;
pub mod core;
pub mod objects;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        component::{Component, ComponentDraft},
        error::{ValidationError, Violation, ViolationKind},
        field::{FieldFormat, FieldType, FieldValue},
        validation::{ComponentValidator, FieldValidator},
    };

    // === Macros ===
    pub use crate::impl_component;

    // === Objects ===
    pub use crate::objects::{
        Confirm, DispatchActionConfig, Filter, OptionGroup, SelectOption, Text, TextType,
    };

    // === Config ===
    pub use crate::config::{ValidationConfig, ValidationMode};

    // === External dependencies ===
    pub use serde_json::{Value, json};
}

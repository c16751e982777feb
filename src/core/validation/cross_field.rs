//! Component-level validators spanning several fields
//!
//! These run once every field has been declared, with the component under
//! construction as context.

use super::ComponentValidator;
use crate::core::component::Component;
use crate::core::error::{Violation, ViolationKind};
use std::sync::Arc;

/// Validator: at least one of `fields` must be present
pub fn at_least_one_of(fields: &[&str]) -> ComponentValidator {
    let fields: Vec<String> = fields.iter().map(|s| s.to_string()).collect();
    Arc::new(move |component: &Component| {
        if fields.iter().any(|f| component.get(f).is_some()) {
            Ok(())
        } else {
            Err(Violation::spanning(
                ViolationKind::Required,
                fields.clone(),
                format!("at least one of {:?} must be set", fields),
            ))
        }
    })
}

/// Validator: `a` and `b` cannot both be present
pub fn mutually_exclusive(a: &str, b: &str) -> ComponentValidator {
    let (a, b) = (a.to_string(), b.to_string());
    Arc::new(move |component: &Component| {
        if component.get(&a).is_some() && component.get(&b).is_some() {
            Err(Violation::cross_field(
                [a.clone(), b.clone()],
                format!("'{}' and '{}' cannot both be set", a, b),
            ))
        } else {
            Ok(())
        }
    })
}

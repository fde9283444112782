//! Create-Request Validation Module
//!
//! This module checks a raw create payload against the required shape before
//! it reaches the store. It ensures the payload carries a non-empty string
//! name and a strictly positive numeric price.

use serde_json::Value;

use crate::catalog::NewFruit;
use crate::errors::StoreError;

/// Validate an untyped create payload into a [`NewFruit`].
///
/// The check is purely structural: uniqueness is the store's job. Every
/// failing field is named in the resulting [`StoreError::ValidationFailed`]
/// so clients see all problems at once.
pub fn validate_create_request(payload: &Value) -> Result<NewFruit, StoreError> {
    let Some(object) = payload.as_object() else {
        return Err(StoreError::ValidationFailed {
            reason: "payload must be a JSON object".to_string(),
        });
    };

    let mut failures = Vec::new();

    let name = match object.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => Some(name.to_string()),
        Some(_) => {
            failures.push("name must be a non-empty string");
            None
        }
        None => {
            failures.push("name is required and must be a string");
            None
        }
    };

    let price = match object.get("price") {
        Some(value) => match value.as_f64() {
            Some(price) if price > 0.0 => Some(price),
            _ => {
                failures.push("price must be a number greater than 0");
                None
            }
        },
        None => {
            failures.push("price is required and must be a number");
            None
        }
    };

    match (name, price) {
        (Some(name), Some(price)) => Ok(NewFruit { name, price }),
        _ => Err(StoreError::ValidationFailed {
            reason: failures.join("; "),
        }),
    }
}

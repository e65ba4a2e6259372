//! Host list validation.
//!
//! # Responsibilities
//! - Check the raw JSON shape before deserializing (array of objects)
//! - Check that every entry carries string `protocol` and `hostname` fields
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: &Value → Result<(), Vec<ValidationError>>
//! - Values are never normalized; presence and type are the only checks

use serde_json::Value;
use thiserror::Error;

/// Fields every host entry must carry.
pub const REQUIRED_FIELDS: [&str; 2] = ["protocol", "hostname"];

/// A single shape problem in the host list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("host list must be a JSON array")]
    NotAnArray,

    #[error("entry {index} is not an object")]
    EntryNotAnObject { index: usize },

    #[error("entry {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("entry {index} field `{field}` is not a string")]
    FieldNotString { index: usize, field: &'static str },
}

/// Validate the raw host list document.
pub fn validate_host_list(doc: &Value) -> Result<(), Vec<ValidationError>> {
    let Some(entries) = doc.as_array() else {
        return Err(vec![ValidationError::NotAnArray]);
    };

    let mut errors = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let Some(object) = entry.as_object() else {
            errors.push(ValidationError::EntryNotAnObject { index });
            continue;
        };

        for field in REQUIRED_FIELDS {
            match object.get(field) {
                None => errors.push(ValidationError::MissingField { index, field }),
                Some(Value::String(_)) => {}
                Some(_) => errors.push(ValidationError::FieldNotString { index, field }),
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

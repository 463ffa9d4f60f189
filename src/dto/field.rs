//! Field extraction helpers for request body decoding.
//!
//! Each helper pulls one field out of a parsed JSON body, recording an error
//! message against the field name when it is missing or malformed and
//! returning `None` (or the default) in that case. Callers run every helper
//! before checking the error set, so a single response lists all failing
//! fields.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{error::validation::FieldErrors, util::datetime};

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_STRING: &str = "Not a valid string.";
pub const INVALID_BOOLEAN: &str = "Not a valid boolean.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const INVALID_DATETIME: &str = "Datetime has wrong format.";

pub fn max_length_message(max_len: usize) -> String {
    format!("Ensure this field has no more than {} characters.", max_len)
}

/// Extracts a required string field, enforcing a maximum character count.
pub fn required_string(
    body: &Value,
    field: &str,
    max_len: usize,
    errors: &mut FieldErrors,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, REQUIRED);
            None
        }
        Some(Value::String(value)) => {
            if value.chars().count() > max_len {
                errors.push(field, max_length_message(max_len));
                None
            } else {
                Some(value.clone())
            }
        }
        Some(_) => {
            errors.push(field, INVALID_STRING);
            None
        }
    }
}

/// Extracts an optional boolean field, falling back to `default` when absent.
///
/// String renderings of booleans are accepted, since form-style clients send
/// `"false"` rather than a JSON boolean.
pub fn optional_bool(body: &Value, field: &str, default: bool, errors: &mut FieldErrors) -> bool {
    match body.get(field) {
        None | Some(Value::Null) => default,
        Some(Value::Bool(value)) => *value,
        Some(Value::String(value)) => match value.as_str() {
            "true" | "True" => true,
            "false" | "False" => false,
            _ => {
                errors.push(field, INVALID_BOOLEAN);
                default
            }
        },
        Some(_) => {
            errors.push(field, INVALID_BOOLEAN);
            default
        }
    }
}

/// Extracts a required timestamp field in the wire format.
pub fn required_datetime(
    body: &Value,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<DateTime<Utc>> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, REQUIRED);
            None
        }
        Some(Value::String(value)) => match datetime::parse_timestamp(value) {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                errors.push(field, INVALID_DATETIME);
                None
            }
        },
        Some(_) => {
            errors.push(field, INVALID_DATETIME);
            None
        }
    }
}

/// Extracts a required integer field. Numeric strings are accepted.
pub fn required_i32(body: &Value, field: &str, errors: &mut FieldErrors) -> Option<i32> {
    let invalid = |errors: &mut FieldErrors| {
        errors.push(field, INVALID_INTEGER);
        None
    };

    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, REQUIRED);
            None
        }
        Some(Value::Number(value)) => match value.as_i64().and_then(|v| i32::try_from(v).ok()) {
            Some(parsed) => Some(parsed),
            None => invalid(errors),
        },
        Some(Value::String(value)) => match value.parse::<i32>() {
            Ok(parsed) => Some(parsed),
            Err(_) => invalid(errors),
        },
        Some(_) => invalid(errors),
    }
}

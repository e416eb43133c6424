//! Required-field checks.

use serde_json::Value;
use tracing::debug;

use cmms_model::{FieldDescriptor, FormData, ValidationResult};

use crate::messages;

/// Returns true if a submitted value counts as missing.
///
/// Missing means absent, `null`, or a string that is blank after trimming.
/// `0` and `false` are real values.
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(_) => false,
    }
}

/// Messages for every required field that is missing, in descriptor order.
pub fn missing_field_errors(data: &FormData, fields: &[FieldDescriptor]) -> Vec<String> {
    fields
        .iter()
        .filter(|field| field.required && is_missing(data.get(&field.key)))
        .map(|field| {
            debug!(field = %field.key, "required field missing");
            messages::required_field(&field.label)
        })
        .collect()
}

/// Check only required-ness.
pub fn validate_required(data: &FormData, fields: &[FieldDescriptor]) -> ValidationResult {
    ValidationResult::from_errors(missing_field_errors(data, fields))
}

//! User-facing message catalog.
//!
//! Every string shown to the user by a validator is built here so the
//! wording stays consistent across forms.

use cmms_model::{CrudOperation, DataType};

pub const RUT_REQUIRED: &str = "RUT is required";
pub const RUT_LENGTH: &str = "RUT must have between 8 and 9 characters";
pub const RUT_FORMAT: &str = "Invalid RUT format. Use 12.345.678-9";
pub const RUT_INVALID: &str = "RUT entered is not valid";

pub const INVALID_INTEGER: &str = "Value must be an integer";
pub const INVALID_FLOAT: &str = "Value must be a decimal number";
pub const INVALID_BOOLEAN: &str = "Value must be a boolean: true, false, 1 or 0";
pub const INVALID_JSON: &str = "Value must be valid JSON";

pub const INVALID_COLOR: &str = "must be a hexadecimal color code like #1A2B3C";

pub const NOT_EDITABLE: &str = "This record is not editable";

/// Fallback shown when a failed operation carries no server message.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Error message for a value rejected under `data_type`.
///
/// Returns `None` for `String`, which never rejects.
pub fn invalid_value(data_type: DataType) -> Option<&'static str> {
    match data_type {
        DataType::String => None,
        DataType::Integer => Some(INVALID_INTEGER),
        DataType::Float => Some(INVALID_FLOAT),
        DataType::Boolean => Some(INVALID_BOOLEAN),
        DataType::Json => Some(INVALID_JSON),
    }
}

pub fn required_field(label: &str) -> String {
    format!("{label} is required")
}

pub fn invalid_field(label: &str, detail: &str) -> String {
    format!("{label}: {detail}")
}

pub fn invalid_color(label: &str) -> String {
    format!("{label} {INVALID_COLOR}")
}

/// Success toast for a completed operation, e.g. "Prioridad creado exitosamente".
pub fn crud_success(operation: CrudOperation, entity: &str) -> String {
    let participle = match operation {
        CrudOperation::Create => "creado",
        CrudOperation::Update => "actualizado",
        CrudOperation::Delete => "eliminado",
    };
    format!("{entity} {participle} exitosamente")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_messages_name_their_type() {
        assert!(invalid_value(DataType::String).is_none());
        assert!(invalid_value(DataType::Integer).unwrap().contains("integer"));
        assert!(invalid_value(DataType::Float).unwrap().contains("decimal number"));
        assert!(invalid_value(DataType::Boolean).unwrap().contains("boolean"));
        assert!(invalid_value(DataType::Json).unwrap().contains("JSON"));
    }

    #[test]
    fn crud_success_uses_participle() {
        assert_eq!(
            crud_success(CrudOperation::Delete, "Activo"),
            "Activo eliminado exitosamente"
        );
    }
}

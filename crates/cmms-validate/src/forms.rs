//! Entity form schemas and form-submit validation.
//!
//! Categories, priorities, work-order types and system parameters share the
//! same rules: required fields, typed values and color codes. A
//! [`FormSchema`] lists the fields of one entity form and
//! [`validate_form`] applies the rules in a fixed order so error lists are
//! stable.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use cmms_model::{CmmsError, DataType, FieldDescriptor, FormData, Result, ValidationResult};

use crate::color::is_valid_hex_color;
use crate::editable::{Editable, ensure_editable};
use crate::messages;
use crate::parameter::validate_parameter_value;
use crate::required::{is_missing, missing_field_errors};

/// Field layout of one entity form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Entity label used in messages, e.g. "Prioridad".
    pub entity: String,
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn new(entity: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            entity: entity.into(),
            fields,
        }
    }

    pub fn category() -> Self {
        Self::new(
            "Categoría",
            vec![
                FieldDescriptor::new("name", "Name").required(),
                FieldDescriptor::new("description", "Description"),
                FieldDescriptor::new("color", "Color").color(),
            ],
        )
    }

    pub fn priority() -> Self {
        Self::new(
            "Prioridad",
            vec![
                FieldDescriptor::new("name", "Name").required(),
                FieldDescriptor::new("level", "Level")
                    .with_type(DataType::Integer)
                    .required(),
                FieldDescriptor::new("color", "Color").color(),
            ],
        )
    }

    pub fn work_order_type() -> Self {
        Self::new(
            "Tipo de orden de trabajo",
            vec![
                FieldDescriptor::new("name", "Name").required(),
                FieldDescriptor::new("description", "Description"),
                FieldDescriptor::new("color", "Color").color(),
            ],
        )
    }

    pub fn parameter() -> Self {
        Self::new(
            "Parámetro",
            vec![
                FieldDescriptor::new("name", "Name").required(),
                FieldDescriptor::new("data_type", "Data type").required(),
                FieldDescriptor::new("value", "Value")
                    .typed_by("data_type")
                    .required(),
                FieldDescriptor::new("description", "Description"),
            ],
        )
    }

    /// Names accepted by [`FormSchema::by_name`].
    pub const NAMES: [&'static str; 4] = ["category", "priority", "work-order-type", "parameter"];

    /// Look up a built-in schema; `_` and `-` are interchangeable.
    pub fn by_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().replace('_', "-").as_str() {
            "category" => Ok(Self::category()),
            "priority" => Ok(Self::priority()),
            "work-order-type" => Ok(Self::work_order_type()),
            "parameter" => Ok(Self::parameter()),
            _ => Err(CmmsError::UnknownEntity {
                name: name.to_string(),
            }),
        }
    }
}

/// Validate submitted data against a schema.
///
/// Order: required fields, then typed values, then color codes. Fields that
/// are missing are only reported by the required check.
pub fn validate_form(schema: &FormSchema, data: &FormData) -> ValidationResult {
    let mut errors = missing_field_errors(data, &schema.fields);

    for field in &schema.fields {
        let Some(value) = present(data, field) else {
            continue;
        };
        let data_type = field.effective_type(data);
        if !data_type.is_constrained() {
            continue;
        }
        if let Some(detail) = typed_value_error(value, data_type) {
            errors.push(messages::invalid_field(&field.label, &detail));
        }
    }

    for field in schema.fields.iter().filter(|field| field.color) {
        let Some(value) = present(data, field) else {
            continue;
        };
        if !value.as_str().is_some_and(is_valid_hex_color) {
            errors.push(messages::invalid_color(&field.label));
        }
    }

    debug!(
        entity = %schema.entity,
        errors = errors.len(),
        "form validated"
    );
    ValidationResult::from_errors(errors)
}

/// Validate an edit of an existing record.
///
/// A record marked as not editable is rejected before any value is looked at.
pub fn validate_edit<E: Editable + ?Sized>(
    schema: &FormSchema,
    data: &FormData,
    record: &E,
) -> ValidationResult {
    if let Err(blocked) = ensure_editable(record) {
        debug!(entity = %schema.entity, "edit blocked");
        return ValidationResult::from_errors(vec![blocked.to_string()]);
    }
    validate_form(schema, data)
}

fn present<'a>(data: &'a FormData, field: &FieldDescriptor) -> Option<&'a Value> {
    let value = data.get(&field.key);
    if is_missing(value) { None } else { value }
}

/// Check a JSON form value against a data type, returning the error detail.
fn typed_value_error(value: &Value, data_type: DataType) -> Option<String> {
    let raw = match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        // Already-structured values are JSON by construction.
        Value::Object(_) | Value::Array(_) if data_type == DataType::Json => return None,
        _ => {
            return messages::invalid_value(data_type).map(str::to_string);
        }
    };
    validate_parameter_value(&raw, data_type).error
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(value: Value) -> FormData {
        match value {
            Value::Object(map) => map,
            _ => panic!("test form must be an object"),
        }
    }

    #[test]
    fn by_name_accepts_both_separators() {
        assert_eq!(
            FormSchema::by_name("work_order_type").unwrap(),
            FormSchema::work_order_type()
        );
        assert_eq!(
            FormSchema::by_name("Work-Order-Type").unwrap(),
            FormSchema::work_order_type()
        );
        assert!(matches!(
            FormSchema::by_name("asset"),
            Err(CmmsError::UnknownEntity { .. })
        ));
    }

    #[test]
    fn missing_value_is_not_type_checked() {
        let result = validate_form(
            &FormSchema::priority(),
            &form(json!({"name": "Alta", "level": ""})),
        );
        assert_eq!(result.errors, vec!["Level is required".to_string()]);
    }

    #[test]
    fn numeric_level_accepts_json_number() {
        let result = validate_form(
            &FormSchema::priority(),
            &form(json!({"name": "Alta", "level": 3})),
        );
        assert!(result.valid);
        let result = validate_form(
            &FormSchema::priority(),
            &form(json!({"name": "Alta", "level": 2.5})),
        );
        assert!(!result.valid);
    }

    #[test]
    fn structured_json_value_is_accepted() {
        let result = validate_form(
            &FormSchema::parameter(),
            &form(json!({"name": "limits", "data_type": "json", "value": {"max": 3}})),
        );
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn non_string_color_is_rejected() {
        let result = validate_form(
            &FormSchema::category(),
            &form(json!({"name": "Eléctrica", "color": 123456})),
        );
        assert_eq!(result.errors, vec![messages::invalid_color("Color")]);
    }
}

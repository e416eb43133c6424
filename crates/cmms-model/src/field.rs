//! Form field metadata and submitted form data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::DataType;
use crate::error::{CmmsError, Result};

/// Submitted form values keyed by field key.
///
/// An absent key is an undefined value; `Value::Null` is an explicit null.
pub type FormData = Map<String, Value>;

/// Parse a JSON document into form data. The top level must be an object.
pub fn parse_form_data(input: &str) -> Result<FormData> {
    match serde_json::from_str::<Value>(input)? {
        Value::Object(map) => Ok(map),
        other => Err(CmmsError::NotAnObject {
            found: json_type_name(&other),
        }),
    }
}

/// Name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Pairs a form field with its declared type and required-ness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Key of the value in [`FormData`].
    pub key: String,
    /// Human-readable label used in error messages.
    pub label: String,
    /// Declared type of the value.
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default)]
    pub required: bool,
    /// Value must be a `#RRGGBB` color code.
    #[serde(default)]
    pub color: bool,
    /// Key of a sibling field holding this field's data type tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typed_by: Option<String>,
}

impl FieldDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            data_type: DataType::String,
            required: false,
            color: false,
            typed_by: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    #[must_use]
    pub fn color(mut self) -> Self {
        self.color = true;
        self
    }

    #[must_use]
    pub fn typed_by(mut self, key: impl Into<String>) -> Self {
        self.typed_by = Some(key.into());
        self
    }

    /// Resolve the effective data type against the submitted form.
    ///
    /// A `typed_by` field takes its type from the sibling value's tag,
    /// falling back to `String` for unknown or missing tags.
    pub fn effective_type(&self, data: &FormData) -> DataType {
        match &self.typed_by {
            Some(key) => data
                .get(key)
                .and_then(Value::as_str)
                .map(DataType::from_tag)
                .unwrap_or_default(),
            None => self.data_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_form_data_requires_object() {
        assert!(parse_form_data(r#"{"name": "Pump"}"#).is_ok());
        let err = parse_form_data("[1, 2]").unwrap_err();
        assert!(matches!(err, CmmsError::NotAnObject { found: "array" }));
        assert!(matches!(
            parse_form_data("{name:").unwrap_err(),
            CmmsError::Json(_)
        ));
    }

    #[test]
    fn effective_type_reads_sibling_tag() {
        let field = FieldDescriptor::new("value", "Value").typed_by("data_type");
        let mut data = FormData::new();
        assert_eq!(field.effective_type(&data), DataType::String);
        data.insert("data_type".to_string(), json!("integer"));
        assert_eq!(field.effective_type(&data), DataType::Integer);
        data.insert("data_type".to_string(), json!(3));
        assert_eq!(field.effective_type(&data), DataType::String);
    }

    #[test]
    fn descriptor_deserializes_with_defaults() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"key": "level", "label": "Level", "required": true}"#)
                .expect("deserialize descriptor");
        assert_eq!(field.data_type, DataType::String);
        assert!(field.required);
        assert!(!field.color);
        assert!(field.typed_by.is_none());
    }
}

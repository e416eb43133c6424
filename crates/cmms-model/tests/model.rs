use cmms_model::{
    CrudFeedback, DataType, ErrorKind, FieldDescriptor, FieldError, ParameterCheck,
    ValidationResult,
};

#[test]
fn field_descriptor_builder_sets_flags() {
    let field = FieldDescriptor::new("level", "Level")
        .with_type(DataType::Integer)
        .required();
    assert_eq!(field.key, "level");
    assert_eq!(field.data_type, DataType::Integer);
    assert!(field.required);
    assert!(!field.color);
}

#[test]
fn field_error_serializes_kind_lowercase() {
    let error = FieldError {
        field: "code".to_string(),
        kind: ErrorKind::Unique,
        message: "Ya existe un activo con este código".to_string(),
        field_specific: true,
    };
    let json = serde_json::to_value(&error).expect("serialize field error");
    assert_eq!(json["kind"], "unique");
    assert_eq!(json["field"], "code");
}

#[test]
fn data_type_deserializes_from_tag() {
    let data_type: DataType = serde_json::from_str(r#""boolean""#).expect("deserialize");
    assert_eq!(data_type, DataType::Boolean);
    assert!(serde_json::from_str::<DataType>(r#""hex""#).is_err());
}

#[test]
fn results_roundtrip_through_json() {
    let result = ValidationResult::from_errors(vec!["Name is required".to_string()]);
    let json = serde_json::to_string(&result).expect("serialize result");
    let round: ValidationResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);

    let check = ParameterCheck::invalid("Value must be valid JSON");
    let json = serde_json::to_string(&check).expect("serialize check");
    assert!(json.contains("JSON"));

    let feedback = CrudFeedback {
        success: false,
        should_close_modal: false,
        should_show_toast: true,
        should_refresh_data: false,
        message: "An error occurred".to_string(),
    };
    let json = serde_json::to_value(&feedback).expect("serialize feedback");
    assert_eq!(json["should_show_toast"], true);
}

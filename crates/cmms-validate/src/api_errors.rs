//! Classification of field errors reported by the REST API.
//!
//! The API answers a rejected write with a JSON body keyed by field name,
//! each value a message or a list of messages:
//!
//! ```json
//! { "name": ["Este campo es requerido."], "code": "Ya existe un activo con este código" }
//! ```
//!
//! The server does not send an error kind, so the kind is guessed from
//! keywords in the (mostly Spanish) message text. This is a heuristic: a
//! message that matches no keyword is reported as [`ErrorKind::Format`].

use serde_json::Value;
use tracing::debug;

use cmms_model::{ErrorKind, FieldError};

/// Keywords per kind, checked in this order; the first hit wins.
const KEYWORDS: &[(ErrorKind, &[&str])] = &[
    (ErrorKind::Required, &["requerido", "obligatorio", "required"]),
    (ErrorKind::Unique, &["ya existe", "unique"]),
    (ErrorKind::Type, &["tipo", "type"]),
    (ErrorKind::Range, &["rango", "range"]),
];

/// Keys that describe the whole request rather than one field.
const NON_FIELD_KEYS: &[&str] = &["non_field_errors", "detail"];

/// Keys checked, in order, for a single human-readable server message.
const MESSAGE_KEYS: &[&str] = &["detail", "message", "error"];

/// Guess the kind of a raw server message.
pub fn classify_message(message: &str) -> ErrorKind {
    let lower = message.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(*keyword)))
        .map(|(kind, _)| *kind)
        .unwrap_or(ErrorKind::Format)
}

/// Returns false for form-wide keys such as `non_field_errors` and `detail`.
pub fn is_field_specific(field: &str) -> bool {
    !NON_FIELD_KEYS.contains(&field)
}

/// Flatten and classify every message in an error body.
///
/// Entries are sorted by field name; messages keep list order within a field.
/// A body that is not an object yields no entries.
pub fn classify_api_errors(body: &Value) -> Vec<FieldError> {
    let Some(object) = body.as_object() else {
        debug!("api error body is not an object");
        return Vec::new();
    };
    let mut errors = Vec::new();
    for (field, value) in object {
        for message in messages_of(field, value) {
            errors.push(FieldError {
                field: field.clone(),
                kind: classify_message(&message),
                field_specific: is_field_specific(field),
                message,
            });
        }
    }
    // Stable, so list order survives within a field.
    errors.sort_by(|a, b| a.field.cmp(&b.field));
    errors
}

/// Errors that belong to a named form field.
pub fn field_errors(body: &Value) -> Vec<FieldError> {
    classify_api_errors(body)
        .into_iter()
        .filter(|error| error.field_specific)
        .collect()
}

/// The single message to show in a toast for a failed request.
///
/// Tries `detail`, `message`, then `error`, then the first entry of
/// `non_field_errors`.
pub fn server_message(body: &Value) -> Option<String> {
    let object = body.as_object()?;
    for key in MESSAGE_KEYS {
        if let Some(text) = object.get(*key).and_then(Value::as_str)
            && !text.is_empty()
        {
            return Some(text.to_string());
        }
    }
    object
        .get("non_field_errors")
        .and_then(|value| messages_of("non_field_errors", value).into_iter().next())
}

fn messages_of(field: &str, value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => vec![text.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| scalar_text(field, item))
            .collect(),
        other => scalar_text(field, other).into_iter().collect(),
    }
}

fn scalar_text(field: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Object(_) | Value::Array(_) => {
            debug!(field, "skipping nested api error entry");
            None
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keywords_map_to_kinds() {
        assert_eq!(classify_message("Este campo es requerido."), ErrorKind::Required);
        assert_eq!(classify_message("Campo OBLIGATORIO"), ErrorKind::Required);
        assert_eq!(classify_message("This field is required."), ErrorKind::Required);
        assert_eq!(classify_message("Ya existe un activo con este código"), ErrorKind::Unique);
        assert_eq!(classify_message("code must be unique"), ErrorKind::Unique);
        assert_eq!(classify_message("Tipo de dato incorrecto"), ErrorKind::Type);
        assert_eq!(classify_message("Invalid type."), ErrorKind::Type);
        assert_eq!(classify_message("Fuera de rango"), ErrorKind::Range);
        assert_eq!(classify_message("Value out of RANGE"), ErrorKind::Range);
        assert_eq!(classify_message("Formato inválido"), ErrorKind::Format);
        assert_eq!(classify_message(""), ErrorKind::Format);
    }

    #[test]
    fn earlier_kinds_win() {
        assert_eq!(classify_message("El tipo es requerido"), ErrorKind::Required);
        assert_eq!(
            classify_message("Ya existe un registro de este tipo"),
            ErrorKind::Unique
        );
    }

    #[test]
    fn non_field_keys() {
        assert!(!is_field_specific("non_field_errors"));
        assert!(!is_field_specific("detail"));
        assert!(is_field_specific("name"));
    }

    #[test]
    fn server_message_checks_keys_in_order() {
        assert_eq!(
            server_message(&json!({"message": "m", "detail": "d"})).as_deref(),
            Some("d")
        );
        assert_eq!(
            server_message(&json!({"non_field_errors": ["first", "second"]})).as_deref(),
            Some("first")
        );
        assert_eq!(server_message(&json!({"detail": ""})), None);
        assert_eq!(
            server_message(&json!({"detail": "", "message": "  "})).as_deref(),
            Some("  ")
        );
        assert_eq!(server_message(&json!({"name": ["x"]})), None);
        assert_eq!(server_message(&json!("oops")), None);
    }
}

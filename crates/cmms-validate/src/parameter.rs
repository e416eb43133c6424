//! Typed parameter values.
//!
//! System parameters are stored as raw strings next to a declared data
//! type. The checks here decide whether a raw string is acceptable for its
//! type. Patterns are anchored and use ASCII digit classes, so `"NaN"`,
//! `"Infinity"`, exponent notation and multi-token input never pass.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::IgnoredAny;
use tracing::debug;

use cmms_model::{DataType, ParameterCheck};

use crate::messages;

static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("Invalid integer regex"));

/// `-?digits.digits`, `-?.digits`, or `-?digits` with an optional trailing point.
static FLOAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?([0-9]+\.?[0-9]*|\.[0-9]+)$").expect("Invalid float regex")
});

const BOOLEAN_TOKENS: &[&str] = &["true", "false", "1", "0"];

pub fn is_integer(value: &str) -> bool {
    INTEGER_PATTERN.is_match(value)
}

pub fn is_float(value: &str) -> bool {
    FLOAT_PATTERN.is_match(value)
}

/// Case-insensitive match against `true`, `false`, `1`, `0`.
pub fn is_boolean(value: &str) -> bool {
    let lower = value.to_lowercase();
    BOOLEAN_TOKENS.contains(&lower.as_str())
}

/// Any top-level JSON value, including bare strings, numbers and `null`.
///
/// Only syntax is checked. Nothing is materialized, so out-of-range numbers,
/// deep nesting and lone surrogate escapes are accepted.
pub fn is_json(value: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(value).is_ok()
}

/// Returns true if `value` is acceptable for `data_type`.
pub fn accepts(data_type: DataType, value: &str) -> bool {
    match data_type {
        DataType::String => true,
        DataType::Integer => is_integer(value),
        DataType::Float => is_float(value),
        DataType::Boolean => is_boolean(value),
        DataType::Json => is_json(value),
    }
}

/// Validate a raw parameter value against its declared data type.
pub fn validate_parameter_value(value: &str, data_type: DataType) -> ParameterCheck {
    if accepts(data_type, value) {
        return ParameterCheck::valid();
    }
    debug!(data_type = %data_type, len = value.len(), "parameter value rejected");
    match messages::invalid_value(data_type) {
        Some(message) => ParameterCheck::invalid(message),
        None => ParameterCheck::valid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_accepts_signed_digits_only() {
        for value in ["42", "-7", "0", "007"] {
            assert!(is_integer(value), "{value} should be an integer");
        }
        for value in ["42.5", "1e3", "", "-", "+1", " 1", "1 2", "NaN", "Infinity", "١٢"] {
            assert!(!is_integer(value), "{value} should not be an integer");
        }
    }

    #[test]
    fn float_accepts_single_decimal_point() {
        for value in ["3.14", "-0.5", ".5", "-.5", "10", "10.", "-10."] {
            assert!(is_float(value), "{value} should be a float");
        }
        for value in ["1.2.3", ".", "-", "1e5", "NaN", "Infinity", "1 .5", "", "-.", "1,5"] {
            assert!(!is_float(value), "{value} should not be a float");
        }
    }

    #[test]
    fn boolean_is_case_insensitive() {
        for value in ["true", "FALSE", "True", "1", "0"] {
            assert!(is_boolean(value), "{value} should be a boolean");
        }
        for value in ["yes", "no", "2", "-1", "", "t", " true"] {
            assert!(!is_boolean(value), "{value} should not be a boolean");
        }
    }

    #[test]
    fn json_accepts_any_top_level_value() {
        for value in [r#"{"a":1}"#, "[1,2]", r#""text""#, "3.5", "true", "null"] {
            assert!(is_json(value), "{value} should be JSON");
        }
        for value in ["{a:1}", "{'a':1}", r#"{"a":1"#, "", "undefined", "NaN"] {
            assert!(!is_json(value), "{value} should not be JSON");
        }
    }

    #[test]
    fn json_checks_syntax_only() {
        let nested = format!("{}{}", "[".repeat(200), "]".repeat(200));
        for value in ["1e400", nested.as_str(), r#""\ud800""#] {
            assert!(
                validate_parameter_value(value, DataType::Json).valid,
                "{value} should be JSON"
            );
        }
        let unbalanced = format!("{}{}", "[".repeat(200), "]".repeat(199));
        assert!(!is_json(&unbalanced));
    }

    #[test]
    fn string_accepts_everything() {
        assert!(validate_parameter_value("", DataType::String).valid);
        assert!(validate_parameter_value("{a:1}", DataType::String).valid);
    }

    #[test]
    fn rejected_values_carry_type_message() {
        let check = validate_parameter_value("42.5", DataType::Integer);
        assert!(!check.valid);
        assert!(check.error.as_deref().unwrap().contains("integer"));

        let check = validate_parameter_value("abc", DataType::Float);
        assert!(check.error.as_deref().unwrap().contains("decimal number"));

        let check = validate_parameter_value("yes", DataType::Boolean);
        assert!(check.error.as_deref().unwrap().contains("boolean"));

        let check = validate_parameter_value("{a:1}", DataType::Json);
        assert!(check.error.as_deref().unwrap().contains("JSON"));
    }
}

//! Validation outcomes.
//!
//! Every validator returns one of these values instead of failing. They are
//! produced fresh per call and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::enums::ErrorKind;

/// Form-level result: the form may be submitted iff `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// One message per failed check, in check order.
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a result from collected messages; valid iff there are none.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// User-facing RUT check: `message` is set iff the RUT was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RutValidation {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RutValidation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

/// Outcome of checking one raw parameter value against its data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParameterCheck {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// A single field error reported by the server, after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
    /// False for form-wide entries such as `non_field_errors` and `detail`.
    pub field_specific: bool,
}

/// CRUD operation performed from an entity modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrudOperation {
    Create,
    Update,
    Delete,
}

impl CrudOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrudOperation::Create => "create",
            CrudOperation::Update => "update",
            CrudOperation::Delete => "delete",
        }
    }
}

/// How the UI must react after a CRUD call completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrudFeedback {
    pub success: bool,
    pub should_close_modal: bool,
    pub should_show_toast: bool,
    pub should_refresh_data: bool,
    pub message: String,
}

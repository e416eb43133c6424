//! UI reaction after a create, update or delete call.
//!
//! Success closes the modal, shows a toast and refreshes the listing.
//! Failure keeps the modal open so the user's input survives, shows a toast
//! and does not refresh.

use serde_json::Value;

use cmms_model::{CrudFeedback, CrudOperation};

use crate::api_errors::server_message;
use crate::messages;

/// Feedback for a completed operation on `entity` (a display label).
pub fn success(operation: CrudOperation, entity: &str) -> CrudFeedback {
    CrudFeedback {
        success: true,
        should_close_modal: true,
        should_show_toast: true,
        should_refresh_data: true,
        message: messages::crud_success(operation, entity),
    }
}

/// Feedback for a failed operation.
///
/// A non-empty server message is kept verbatim, whitespace included;
/// a missing or empty one gets the generic fallback.
pub fn failure(server_message: Option<&str>) -> CrudFeedback {
    let message = match server_message {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => messages::GENERIC_ERROR.to_string(),
    };
    CrudFeedback {
        success: false,
        should_close_modal: false,
        should_show_toast: true,
        should_refresh_data: false,
        message,
    }
}

/// Failure feedback built from an API error body.
pub fn from_api_error(body: &Value) -> CrudFeedback {
    failure(server_message(body).as_deref())
}

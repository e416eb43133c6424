//! Client-side validation rules for the CMMS frontend.
//!
//! Every function here is pure: it takes raw input and returns a fresh
//! result value, never an error for rejected input. Compiled patterns are
//! shared process-wide, so the rules are safe to call from any thread.

pub mod access;
pub mod api_errors;
pub mod color;
pub mod editable;
pub mod feedback;
pub mod forms;
pub mod messages;
pub mod parameter;
pub mod required;
pub mod rut;

pub use access::RoleGuard;
pub use api_errors::{
    classify_api_errors, classify_message, field_errors, is_field_specific, server_message,
};
pub use color::is_valid_hex_color;
pub use editable::{EditBlocked, Editable, ensure_editable};
pub use forms::{FormSchema, validate_edit, validate_form};
pub use parameter::validate_parameter_value;
pub use required::{is_missing, validate_required};
pub use rut::{
    Rut, RutError, calculate_dv, clean_rut, format_rut, validate_rut, validate_rut_with_message,
};

pub mod enums;
pub mod error;
pub mod field;
pub mod validation;

pub use enums::{DataType, ErrorKind};
pub use error::{CmmsError, Result};
pub use field::{FieldDescriptor, FormData, json_type_name, parse_form_data};
pub use validation::{
    CrudFeedback, CrudOperation, FieldError, ParameterCheck, RutValidation, ValidationResult,
};

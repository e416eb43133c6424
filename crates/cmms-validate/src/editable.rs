//! Editability guard.
//!
//! Records (system parameters in particular) may carry an explicit
//! "not editable" flag. Such a record blocks every edit, whatever values
//! are supplied. An absent flag means editable.

use serde_json::Value;
use thiserror::Error;

use cmms_model::FormData;

use crate::messages;

/// Keys that carry the editability flag on a stored record.
const EDITABLE_KEYS: &[&str] = &["is_editable", "editable"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", messages::NOT_EDITABLE)]
pub struct EditBlocked;

/// Anything that may carry an explicit editability flag.
pub trait Editable {
    /// `Some(false)` blocks edits; `None` means no flag was set.
    fn editable_flag(&self) -> Option<bool>;

    fn is_editable(&self) -> bool {
        self.editable_flag() != Some(false)
    }
}

impl Editable for Option<bool> {
    fn editable_flag(&self) -> Option<bool> {
        *self
    }
}

impl Editable for FormData {
    fn editable_flag(&self) -> Option<bool> {
        EDITABLE_KEYS
            .iter()
            .find_map(|key| self.get(*key).and_then(Value::as_bool))
    }
}

/// Fail if the target is explicitly marked as not editable.
pub fn ensure_editable<T: Editable + ?Sized>(target: &T) -> Result<(), EditBlocked> {
    if target.is_editable() {
        Ok(())
    } else {
        Err(EditBlocked)
    }
}

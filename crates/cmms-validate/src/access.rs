//! Role-based visibility guard.
//!
//! Pages and actions declare which roles may see them. The guard is a pure
//! membership test; role names come from the session and are compared
//! case-insensitively.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGuard {
    allowed: BTreeSet<String>,
}

impl RoleGuard {
    /// An empty allow-list permits every role.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: allowed
                .into_iter()
                .map(|role| normalize(role.as_ref()))
                .filter(|role| !role.is_empty())
                .collect(),
        }
    }

    pub fn permits(&self, role: &str) -> bool {
        self.allowed.is_empty() || self.allowed.contains(&normalize(role))
    }

    /// True if any of the user's roles is allowed.
    pub fn permits_any<S: AsRef<str>>(&self, roles: &[S]) -> bool {
        self.allowed.is_empty() || roles.iter().any(|role| self.permits(role.as_ref()))
    }
}

fn normalize(role: &str) -> String {
    role.trim().to_lowercase()
}

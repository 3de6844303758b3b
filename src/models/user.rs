use serde::{Deserialize, Serialize};

use super::visit::Visit;

/// One account in the user store.
///
/// The password is stored and compared as plaintext. This mirrors the
/// existing `users.json` files and is a known weakness of the format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub password: String,
    #[serde(default)]
    pub history: Vec<Visit>,
}

impl UserRecord {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            history: Vec::new(),
        }
    }

    /// Exact, case-sensitive comparison. No normalization.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

//! User record types as they appear on the wire

use serde::{Deserialize, Serialize};

/// A user record returned by the service.
///
/// Immutable once received — the console replaces whole records, never
/// patches fields. Timestamps are opaque strings and are not parsed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    /// Server-assigned opaque id.
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    /// Nullable on the wire.
    pub avatar_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// Best label for status text: trimmed name, else trimmed email, else "user".
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if !name.is_empty() {
            return name;
        }
        let email = self.email.trim();
        if !email.is_empty() {
            return email;
        }
        "user"
    }
}

/// Request body for `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

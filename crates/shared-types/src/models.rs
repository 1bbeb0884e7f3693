use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization tier of a signed-in user.
///
/// - `Viewer`: read-only access. Also the fallback when no role is known.
/// - `Editor`: can create and edit content.
/// - `Admin`: full access, including deletion and user management.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    #[default]
    Viewer,
}

impl UserRole {
    /// Parse a role column value. Unknown values default to Viewer.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "editor" => UserRole::Editor,
            _ => UserRole::Viewer,
        }
    }

    /// Lowercase string as stored by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
            UserRole::Viewer => "viewer",
        }
    }

    /// Role used for permission checks when the session carries none.
    pub fn effective(role: Option<UserRole>) -> UserRole {
        role.unwrap_or_default()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form metadata attached to an account at sign-up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// The signed-in account as returned by the auth provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl AuthUser {
    pub fn email_or_blank(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    /// Name shown in headers: full name, then email, then "User".
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("User")
    }
}

/// Token pair plus the user it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

/// Row shape of the role lookup on the profiles table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRole {
    #[serde(default)]
    pub role: Option<String>,
}

impl ProfileRole {
    pub fn user_role(&self) -> UserRole {
        self.role
            .as_deref()
            .map(UserRole::from_str_or_default)
            .unwrap_or_default()
    }
}

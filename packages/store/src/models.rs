//! # Session and user models
//!
//! The persisted half of the client state. A [`Session`] pairs the opaque
//! bearer token handed out by `POST /api/auth/login` with the [`User`]
//! profile that came back in the same response.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Role`] | Access class of a user. Only `student` and `admin` exist; anything else fails to decode. |
//! | [`User`] | The cached profile. Extra server fields (`id`, `is_active`, `created_at`) are ignored. |
//! | [`Session`] | Token plus user. Only ever constructed with both halves present. |

use serde::{Deserialize, Serialize};

/// Access class of a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    /// Landing page after login for this role.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Student => "/student/dashboard",
        }
    }
}

/// User profile as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub full_name: String,
    pub role: Role,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

/// An authenticated session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

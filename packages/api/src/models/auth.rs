//! # Authentication request and response bodies
//!
//! | Struct | Endpoint | Direction |
//! |--------|----------|-----------|
//! | [`LoginRequest`] | `POST /api/auth/login` | request |
//! | [`LoginResponse`] | `POST /api/auth/login` | 2xx response |
//! | [`RegisterRequest`] | `POST /api/auth/register` | request |
//! | [`ErrorBody`] | any | non-2xx response |

use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::{Role, User};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

/// Self-registration payload. The role is always [`Role::Student`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub student_id: Option<String>,
    pub password: String,
    pub role: Role,
}

impl RegisterRequest {
    pub fn student(
        full_name: String,
        email: String,
        student_id: Option<String>,
        password: String,
    ) -> Self {
        Self {
            full_name,
            email,
            student_id,
            password,
            role: Role::Student,
        }
    }
}

/// Error body returned by the API on non-2xx responses.
///
/// `detail` is usually a string, but request validation failures carry a list
/// of `{loc, msg, type}` objects instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorBody {
    /// Human-readable reason, if the body carried one.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_request_is_always_student() {
        let req = RegisterRequest::student(
            "Ada".into(),
            "ada@school.edu".into(),
            None,
            "pw".into(),
        );
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            json!({
                "full_name": "Ada",
                "email": "ada@school.edu",
                "student_id": null,
                "password": "pw",
                "role": "student"
            })
        );
    }

    #[test]
    fn test_login_response_decodes_admin() {
        let body = json!({
            "access_token": "jwt.value",
            "token_type": "bearer",
            "user": {
                "id": 1,
                "email": "grace@school.edu",
                "full_name": "Grace Hopper",
                "student_id": null,
                "role": "admin",
                "is_active": true,
                "created_at": "2025-01-01T00:00:00"
            }
        });
        let resp: LoginResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.access_token, "jwt.value");
        assert_eq!(resp.user.role, Role::Admin);
        assert!(resp.user.student_id.is_none());
    }

    #[test]
    fn test_error_body_string_detail() {
        let body: ErrorBody =
            serde_json::from_value(json!({"detail": "Invalid credentials"})).unwrap();
        assert_eq!(body.message().as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_error_body_validation_detail() {
        let body: ErrorBody = serde_json::from_value(json!({
            "detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"},
                {"loc": ["body", "password"], "msg": "field required", "type": "missing"}
            ]
        }))
        .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("value is not a valid email address; field required")
        );
    }

    #[test]
    fn test_error_body_without_detail() {
        let body: ErrorBody = serde_json::from_value(json!({})).unwrap();
        assert!(body.message().is_none());
        let body: ErrorBody = serde_json::from_value(json!({"detail": ""})).unwrap();
        assert!(body.message().is_none());
    }
}

//! # Login and registration form controllers
//!
//! The submit logic of both auth forms, kept free of DOM work so it can run
//! against a fake [`DawssApi`] and an in-memory [`SessionStore`]. The page
//! views in the web crate collect the inputs, call [`submit_login`] or
//! [`submit_register`], and apply the returned outcome: message slots,
//! submit-button state, navigation.
//!
//! ## Failure handling
//!
//! | Failure | Login message | Register message |
//! |---------|---------------|------------------|
//! | passwords differ | | [`PASSWORD_MISMATCH`], no request sent |
//! | non-2xx with `detail` | the server's `detail` | the server's `detail` |
//! | non-2xx without `detail` | [`LOGIN_FAILED`] | [`REGISTER_FAILED`] |
//! | no response / unreadable body | [`NETWORK_ERROR`] | [`NETWORK_ERROR`] |

use api::{ApiError, DawssApi, LoginRequest, RegisterRequest};
use store::{Role, SessionStore};

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match!";
pub const SESSION_NOT_SAVED: &str =
    "Signed in, but your session could not be saved. Please allow site storage and try again.";
pub const ACCOUNT_CREATED: &str = "Account created successfully! Redirecting to login...";

/// Which auth form a submit button belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    pub fn idle_label(self) -> &'static str {
        match self {
            FormKind::Login => "Login",
            FormKind::Register => "Create Account",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            FormKind::Login => "Logging in...",
            FormKind::Register => "Creating Account...",
        }
    }

    pub fn label(self, busy: bool) -> &'static str {
        if busy {
            self.busy_label()
        } else {
            self.idle_label()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session saved; leave for `redirect`.
    Authenticated { role: Role, redirect: &'static str },
    /// Show the message and re-enable the form.
    Failed(String),
}

/// Submit the login form: authenticate, persist the session, pick the dashboard.
pub async fn submit_login(
    api: &impl DawssApi,
    store: &impl SessionStore,
    form: &LoginForm,
) -> LoginOutcome {
    let request = LoginRequest {
        email: form.email.clone(),
        password: form.password.clone(),
    };

    match api.login(&request).await {
        Ok(response) => {
            if let Err(e) = store.save(&response.access_token, &response.user) {
                tracing::error!("Failed to save session: {e}");
                return LoginOutcome::Failed(SESSION_NOT_SAVED.to_string());
            }
            let role = response.user.role;
            tracing::info!("Logged in as {role:?}");
            LoginOutcome::Authenticated {
                role,
                redirect: role.dashboard_path(),
            }
        }
        Err(e) => {
            log_failure("Login", &e);
            LoginOutcome::Failed(e.user_message(LOGIN_FAILED, NETWORK_ERROR))
        }
    }
}

/// A form rejected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{}", PASSWORD_MISMATCH)]
    PasswordMismatch,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub student_id: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Check local preconditions and build the request body.
    pub fn to_request(&self) -> Result<RegisterRequest, FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        let student_id = if self.student_id.is_empty() {
            None
        } else {
            Some(self.student_id.clone())
        };
        Ok(RegisterRequest::student(
            self.full_name.clone(),
            self.email.clone(),
            student_id,
            self.password.clone(),
        ))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Account exists; show [`ACCOUNT_CREATED`] and head to `/login` after the delay.
    Created,
    /// Rejected before the request was sent. The form was never disabled.
    Invalid(String),
    /// Show the message and re-enable the form.
    Failed(String),
}

/// Submit the registration form.
pub async fn submit_register(api: &impl DawssApi, form: &RegisterForm) -> RegisterOutcome {
    let request = match form.to_request() {
        Ok(request) => request,
        Err(e) => return RegisterOutcome::Invalid(e.to_string()),
    };

    match api.register(&request).await {
        Ok(()) => {
            tracing::info!("Registered {}", request.email);
            RegisterOutcome::Created
        }
        Err(e) => {
            log_failure("Registration", &e);
            RegisterOutcome::Failed(e.user_message(REGISTER_FAILED, NETWORK_ERROR))
        }
    }
}

fn log_failure(action: &str, e: &ApiError) {
    if e.is_transport() {
        tracing::error!("{action} request failed: {e}");
    } else {
        tracing::warn!("{action} rejected: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{admin_login, student_login, FakeApi};
    use api::ApiError;
    use store::{MemoryStore, SessionStore};

    fn login_form() -> LoginForm {
        LoginForm {
            email: "grace@school.edu".to_string(),
            password: "hunter2".to_string(),
        }
    }

    fn register_form(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@school.edu".to_string(),
            student_id: String::new(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(FormKind::Login.label(false), "Login");
        assert_eq!(FormKind::Login.label(true), "Logging in...");
        assert_eq!(FormKind::Register.label(false), "Create Account");
        assert_eq!(FormKind::Register.label(true), "Creating Account...");
    }

    #[tokio::test]
    async fn test_admin_login_saves_session_and_goes_to_admin_dashboard() {
        let api = FakeApi::default().with_login(Ok(admin_login("admin-token")));
        let store = MemoryStore::new();

        let outcome = submit_login(&api, &store, &login_form()).await;

        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                role: Role::Admin,
                redirect: "/admin/dashboard",
            }
        );
        let session = store.load().unwrap();
        assert_eq!(session.token, "admin-token");
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(api.logins(), vec![("grace@school.edu".to_string(), "hunter2".to_string())]);
    }

    #[tokio::test]
    async fn test_student_login_goes_to_student_dashboard() {
        let api = FakeApi::default().with_login(Ok(student_login("student-token")));
        let store = MemoryStore::new();

        let outcome = submit_login(&api, &store, &login_form()).await;

        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                role: Role::Student,
                redirect: "/student/dashboard",
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_login_shows_server_detail() {
        let api = FakeApi::default().with_login(Err(ApiError::Rejected {
            status: 401,
            detail: Some("Invalid credentials".to_string()),
        }));
        let store = MemoryStore::new();

        let outcome = submit_login(&api, &store, &login_form()).await;

        assert_eq!(outcome, LoginOutcome::Failed("Invalid credentials".to_string()));
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_rejected_login_without_detail_uses_fallback() {
        let api = FakeApi::default().with_login(Err(ApiError::Rejected {
            status: 500,
            detail: None,
        }));
        let outcome = submit_login(&api, &MemoryStore::new(), &login_form()).await;
        assert_eq!(outcome, LoginOutcome::Failed(LOGIN_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_login_transport_failure_shows_network_error() {
        let api = FakeApi::default().with_login(Err(ApiError::Transport("offline".to_string())));
        let outcome = submit_login(&api, &MemoryStore::new(), &login_form()).await;
        assert_eq!(outcome, LoginOutcome::Failed(NETWORK_ERROR.to_string()));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let store = MemoryStore::new();
        let previous = student_login("old-token");
        store.save(&previous.access_token, &previous.user).unwrap();
        let api = FakeApi::default().with_login(Err(ApiError::Rejected {
            status: 401,
            detail: None,
        }));

        submit_login(&api, &store, &login_form()).await;

        assert_eq!(store.load().unwrap().token, "old-token");
    }

    #[tokio::test]
    async fn test_mismatched_passwords_never_reach_the_api() {
        let api = FakeApi::default().with_register(Ok(()));

        let outcome = submit_register(&api, &register_form("a", "b")).await;

        assert_eq!(outcome, RegisterOutcome::Invalid("Passwords do not match!".to_string()));
        assert!(api.registrations().is_empty());
    }

    #[tokio::test]
    async fn test_register_sends_student_role_and_drops_empty_student_id() {
        let api = FakeApi::default().with_register(Ok(()));

        let outcome = submit_register(&api, &register_form("s3cret", "s3cret")).await;

        assert_eq!(outcome, RegisterOutcome::Created);
        let sent = api.registrations();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].role, Role::Student);
        assert_eq!(sent[0].student_id, None);
        assert_eq!(sent[0].full_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_register_keeps_given_student_id() {
        let api = FakeApi::default().with_register(Ok(()));
        let mut form = register_form("pw", "pw");
        form.student_id = "S-1815".to_string();

        submit_register(&api, &form).await;

        assert_eq!(api.registrations()[0].student_id.as_deref(), Some("S-1815"));
    }

    #[tokio::test]
    async fn test_register_rejection_and_network_messages() {
        let api = FakeApi::default().with_register(Err(ApiError::Rejected {
            status: 400,
            detail: Some("Email already registered".to_string()),
        }));
        assert_eq!(
            submit_register(&api, &register_form("pw", "pw")).await,
            RegisterOutcome::Failed("Email already registered".to_string())
        );

        let api = FakeApi::default().with_register(Err(ApiError::Rejected {
            status: 400,
            detail: None,
        }));
        assert_eq!(
            submit_register(&api, &register_form("pw", "pw")).await,
            RegisterOutcome::Failed(REGISTER_FAILED.to_string())
        );

        let api = FakeApi::default().with_register(Err(ApiError::Transport("dns".to_string())));
        assert_eq!(
            submit_register(&api, &register_form("pw", "pw")).await,
            RegisterOutcome::Failed(NETWORK_ERROR.to_string())
        );
    }
}

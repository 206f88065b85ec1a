//! Test doubles shared by the controller tests.

use std::cell::RefCell;

use api::{ApiError, Booking, DawssApi, LoginRequest, LoginResponse, RegisterRequest, Role, User};

/// A [`DawssApi`] that replays canned results and records every call.
#[derive(Default)]
pub struct FakeApi {
    login: Option<Result<LoginResponse, ApiError>>,
    register: Option<Result<(), ApiError>>,
    booking: Option<Result<Option<Booking>, ApiError>>,
    logins: RefCell<Vec<(String, String)>>,
    registrations: RefCell<Vec<RegisterRequest>>,
    booking_tokens: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn with_login(mut self, result: Result<LoginResponse, ApiError>) -> Self {
        self.login = Some(result);
        self
    }

    pub fn with_register(mut self, result: Result<(), ApiError>) -> Self {
        self.register = Some(result);
        self
    }

    pub fn with_booking(mut self, result: Result<Option<Booking>, ApiError>) -> Self {
        self.booking = Some(result);
        self
    }

    pub fn logins(&self) -> Vec<(String, String)> {
        self.logins.borrow().clone()
    }

    pub fn registrations(&self) -> Vec<RegisterRequest> {
        self.registrations.borrow().clone()
    }

    pub fn booking_tokens(&self) -> Vec<String> {
        self.booking_tokens.borrow().clone()
    }

    fn unscripted() -> ApiError {
        ApiError::Transport("unscripted call".to_string())
    }
}

impl DawssApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.logins
            .borrow_mut()
            .push((request.email.clone(), request.password.clone()));
        self.login.clone().unwrap_or_else(|| Err(Self::unscripted()))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.registrations.borrow_mut().push(request.clone());
        self.register.clone().unwrap_or_else(|| Err(Self::unscripted()))
    }

    async fn my_booking(&self, token: &str) -> Result<Option<Booking>, ApiError> {
        self.booking_tokens.borrow_mut().push(token.to_string());
        self.booking.clone().unwrap_or_else(|| Err(Self::unscripted()))
    }
}

pub fn user(role: Role) -> User {
    User {
        full_name: match role {
            Role::Admin => "Grace Hopper".to_string(),
            Role::Student => "Ada Lovelace".to_string(),
        },
        role,
        email: "someone@school.edu".to_string(),
        student_id: None,
    }
}

pub fn admin_login(token: &str) -> LoginResponse {
    LoginResponse {
        access_token: token.to_string(),
        token_type: Some("bearer".to_string()),
        user: user(Role::Admin),
    }
}

pub fn student_login(token: &str) -> LoginResponse {
    LoginResponse {
        access_token: token.to_string(),
        token_type: Some("bearer".to_string()),
        user: user(Role::Student),
    }
}

/// A booking decoded from the same JSON shape the server sends.
pub fn booking(status: &str, payment_date: Option<&str>) -> Booking {
    serde_json::from_value(serde_json::json!({
        "id": 5,
        "user_id": 2,
        "seat_id": 19,
        "payment_status": status,
        "payment_amount": 50.0,
        "booking_date": "2025-04-01T12:00:00",
        "payment_date": payment_date,
        "seat": {"id": 19, "seat_number": 3, "table_id": 4, "status": "reserved", "table_number": 4}
    }))
    .expect("valid booking fixture")
}

//! # REST client
//!
//! [`DawssApi`] is the seam between the UI controllers and the backend. The
//! browser build talks to the real server through [`HttpApi`]; tests swap in a
//! recording fake.
//!
//! | Method | Endpoint | Success | Failure |
//! |--------|----------|---------|---------|
//! | [`login`](DawssApi::login) | `POST /api/auth/login` | [`LoginResponse`] | [`ApiError`] |
//! | [`register`](DawssApi::register) | `POST /api/auth/register` | `()` (body ignored) | [`ApiError`] |
//! | [`my_booking`](DawssApi::my_booking) | `GET /api/student/my-booking` | `Some(Booking)`, or `None` on 404 | [`ApiError`] |

use reqwest::{Client, Response, StatusCode};

use crate::error::ApiError;
use crate::models::{Booking, ErrorBody, LoginRequest, LoginResponse, RegisterRequest};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const MY_BOOKING_PATH: &str = "/api/student/my-booking";

/// Async interface over the three endpoints the client consumes.
pub trait DawssApi {
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl std::future::Future<Output = Result<LoginResponse, ApiError>>;
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn my_booking(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Option<Booking>, ApiError>>;
}

/// reqwest-backed client. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl PartialEq for HttpApi {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl HttpApi {
    /// `base_url` is scheme and host, e.g. `https://prom.example.edu`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pass 2xx responses through; turn everything else into [`ApiError::Rejected`].
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message());
    tracing::warn!(status = status.as_u16(), ?detail, "API request rejected");
    Err(ApiError::Rejected {
        status: status.as_u16(),
        detail,
    })
}

impl DawssApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .client
            .post(self.url(LOGIN_PATH))
            .json(request)
            .send()
            .await?;
        let response = ensure_success(response).await?;
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(REGISTER_PATH))
            .json(request)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn my_booking(&self, token: &str) -> Result<Option<Booking>, ApiError> {
        let response = self
            .client
            .get(self.url(MY_BOOKING_PATH))
            .bearer_auth(token)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(response).await?;
        response
            .json::<Booking>()
            .await
            .map(Some)
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

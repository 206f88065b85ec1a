//! Wire models for the REST API.

mod auth;
mod booking;

pub use auth::{ErrorBody, LoginRequest, LoginResponse, RegisterRequest};
pub use booking::{Booking, PaymentStatus, Seat};
pub use store::{Role, User};

//! # API crate: typed access to the DAWSS booking backend
//!
//! The backend is an external service; this crate only knows the three
//! endpoints the browser client consumes and the shapes they exchange.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`DawssApi`] trait and its reqwest implementation [`HttpApi`] |
//! | [`error`] | [`ApiError`]: rejected request vs. transport failure vs. unreadable body |
//! | [`models`] | Request/response bodies and the [`Booking`] model |

pub mod client;
pub mod error;
pub mod models;

pub use client::{DawssApi, HttpApi};
pub use error::ApiError;
pub use models::{
    Booking, ErrorBody, LoginRequest, LoginResponse, PaymentStatus, RegisterRequest, Seat,
};
pub use store::{Role, Session, User};

//! This crate contains the shared client logic and UI for the DAWSS web app.
//!
//! Each page-level concern is split into a pure part (decision or view state,
//! unit tested here) and a Dioxus component that applies it.

pub mod auth_form;
pub mod booking;
pub mod gate;
pub mod platform;

mod auth;
pub use auth::{logout, use_api, use_config, use_session, ClientProvider, Greeting, LogoutButton};

mod messages;
pub use messages::{show_error, show_success, use_flash_messages, FlashMessages, MessageSlots};

mod navbar;
pub use navbar::{nav_state, NavLinks, NavState, Navbar};

mod session;
pub use session::make_session_store;

pub use auth_form::{FormKind, LoginForm, LoginOutcome, RegisterForm, RegisterOutcome};
pub use booking::{
    use_booking_status, BookingPanel, BookingViewState, CardVisibility, DashboardCards,
};
pub use gate::{AuthGate, GateDecision};

#[cfg(test)]
mod testing;

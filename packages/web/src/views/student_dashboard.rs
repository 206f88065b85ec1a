//! Student dashboard: booking status plus the seat/booking action cards.

use dioxus::prelude::*;
use ui::{use_booking_status, BookingPanel, DashboardCards};

use super::MemberNavbar;

#[component]
pub fn StudentDashboard() -> Element {
    let booking = use_booking_status();
    let state = booking.cloned();
    let visibility = state
        .as_ref()
        .map(|state| state.cards())
        .unwrap_or_default();

    let panel = match state {
        Some(state) => rsx! {
            BookingPanel { state }
        },
        None => rsx! {
            p { class: "booking-loading", "Loading your booking..." }
        },
    };

    rsx! {
        MemberNavbar {}

        main {
            class: "page dashboard",
            h1 { "Student Dashboard" }

            section {
                id: "booking-content",
                class: "card booking-card",
                {panel}
            }

            DashboardCards { visibility }
        }
    }
}

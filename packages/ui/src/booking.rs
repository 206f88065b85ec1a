//! # BookingView: the student dashboard's reservation panel
//!
//! [`load_booking`] fetches `GET /api/student/my-booking` and folds the result
//! into a [`BookingViewState`]; [`BookingPanel`] and [`DashboardCards`] only
//! render that value.
//!
//! | Fetch result | State | Panel | Cards |
//! |--------------|-------|-------|-------|
//! | 2xx | [`BookingViewState::Reservation`] | reservation details | "manage booking" shown, "browse seats" hidden |
//! | 404 | [`BookingViewState::NoBooking`] | "No Booking Yet" + seat browsing link | page default |
//! | anything else | [`BookingViewState::Failed`] | failure notice | page default |

use api::{ApiError, Booking, DawssApi, PaymentStatus};
use rust_decimal::RoundingStrategy;
use dioxus::prelude::*;
use store::{Session, SessionStore};

use crate::auth::use_api;
use crate::session::make_session_store;

pub const SEATING_PATH: &str = "/student/seating";
pub const PAYMENT_PATH: &str = "/student/booking";
pub const LOAD_FAILED: &str = "Failed to load booking information. Please try again later.";

/// What the booking panel shows.
#[derive(Clone, Debug, PartialEq)]
pub enum BookingViewState {
    NoBooking,
    Reservation(ReservationView),
    Failed,
}

/// Display-ready fields of a booking.
#[derive(Clone, Debug, PartialEq)]
pub struct ReservationView {
    pub status: PaymentStatus,
    pub table_number: String,
    pub seat_number: String,
    pub amount: String,
    pub payment_date: Option<String>,
}

/// What sits under the reservation details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservationFooter {
    CompletePayment { href: &'static str },
    Confirmed,
}

impl ReservationView {
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            status: booking.payment_status,
            table_number: booking
                .seat
                .table_number
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
            seat_number: booking.seat.seat_number.to_string(),
            amount: format!(
                "${:.2}",
                booking
                    .payment_amount
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            ),
            payment_date: booking
                .payment_date
                .map(|date| date.format("%-m/%-d/%Y").to_string()),
        }
    }

    pub fn badge(&self) -> &'static str {
        match self.status {
            PaymentStatus::Completed => "✓ Paid",
            PaymentStatus::Pending | PaymentStatus::Other => "⏳ Pending Payment",
        }
    }

    pub fn footer(&self) -> ReservationFooter {
        match self.status {
            PaymentStatus::Completed => ReservationFooter::Confirmed,
            PaymentStatus::Pending | PaymentStatus::Other => {
                ReservationFooter::CompletePayment { href: PAYMENT_PATH }
            }
        }
    }
}

/// Visibility of the dashboard's sibling action cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardVisibility {
    pub manage_booking: bool,
    pub browse_seats: bool,
}

impl Default for CardVisibility {
    /// The page as served: seat browsing offered, nothing to manage yet.
    fn default() -> Self {
        Self {
            manage_booking: false,
            browse_seats: true,
        }
    }
}

impl BookingViewState {
    pub fn from_result(result: Result<Option<Booking>, ApiError>) -> Self {
        match result {
            Ok(Some(booking)) => {
                BookingViewState::Reservation(ReservationView::from_booking(&booking))
            }
            Ok(None) => BookingViewState::NoBooking,
            Err(e) => {
                tracing::error!("Failed to load booking: {e}");
                BookingViewState::Failed
            }
        }
    }

    pub fn cards(&self) -> CardVisibility {
        match self {
            BookingViewState::Reservation(_) => CardVisibility {
                manage_booking: true,
                browse_seats: false,
            },
            BookingViewState::NoBooking | BookingViewState::Failed => CardVisibility::default(),
        }
    }
}

/// Fetch the booking for `session` and compute the panel state.
pub async fn load_booking(api: &impl DawssApi, session: Option<&Session>) -> BookingViewState {
    let Some(session) = session else {
        tracing::warn!("No session while loading booking");
        return BookingViewState::Failed;
    };
    BookingViewState::from_result(api.my_booking(&session.token).await)
}

/// Fetch the booking once per mount. `None` while the request is in flight.
pub fn use_booking_status() -> Resource<BookingViewState> {
    let api = use_api();
    use_resource(move || {
        let api = api.clone();
        async move {
            let session = make_session_store().load();
            load_booking(&api, session.as_ref()).await
        }
    })
}

#[component]
pub fn BookingPanel(state: BookingViewState) -> Element {
    match state {
        BookingViewState::NoBooking => rsx! {
            div {
                class: "booking-empty",
                div { class: "booking-empty-icon", "🎫" }
                h3 { "No Booking Yet" }
                p { class: "text-secondary", "You haven't reserved your seat yet." }
                a { class: "btn btn-primary", href: SEATING_PATH, "Browse Available Seats" }
            }
        },
        BookingViewState::Failed => rsx! {
            div { class: "error-message", "{LOAD_FAILED}" }
        },
        BookingViewState::Reservation(view) => rsx! {
            ReservationDetails { view }
        },
    }
}

#[component]
fn ReservationDetails(view: ReservationView) -> Element {
    let badge = view.badge();
    let badge_class = match view.status {
        PaymentStatus::Completed => "status-badge status-badge--paid",
        PaymentStatus::Pending | PaymentStatus::Other => "status-badge status-badge--pending",
    };
    let footer = match view.footer() {
        ReservationFooter::CompletePayment { href } => rsx! {
            a { class: "btn btn-primary btn-block", href: "{href}", "Complete Payment" }
        },
        ReservationFooter::Confirmed => rsx! {
            div { class: "reservation-confirmed", "✓ Your ticket is confirmed! See you at prom!" }
        },
    };
    let ReservationView {
        table_number,
        seat_number,
        amount,
        payment_date,
        ..
    } = view;

    rsx! {
        div {
            class: "reservation",
            div {
                class: "reservation-header",
                h3 { "Your Reservation" }
                span { class: "{badge_class}", "{badge}" }
            }
            div {
                class: "reservation-details",
                div {
                    strong { "Table Number:" }
                    span { class: "reservation-number", "{table_number}" }
                }
                div {
                    strong { "Seat Number:" }
                    span { class: "reservation-number", "{seat_number}" }
                }
                div {
                    strong { "Amount:" }
                    span { class: "reservation-value", "{amount}" }
                }
                if let Some(date) = payment_date {
                    div {
                        strong { "Payment Date:" }
                        span { class: "reservation-value", "{date}" }
                    }
                }
            }
            {footer}
        }
    }
}

/// The "manage booking" and "browse seats" cards next to the panel.
#[component]
pub fn DashboardCards(visibility: CardVisibility) -> Element {
    rsx! {
        div {
            class: "dashboard-cards",
            if visibility.browse_seats {
                div {
                    id: "view-seats-card",
                    class: "card",
                    h3 { "Find Your Seat" }
                    p { "See which tables still have room and reserve your spot." }
                    a { class: "btn btn-primary", href: SEATING_PATH, "View Seating Chart" }
                }
            }
            if visibility.manage_booking {
                div {
                    id: "manage-booking-card",
                    class: "card",
                    h3 { "Manage Booking" }
                    p { "Review your reservation or finish your payment." }
                    a { class: "btn btn-outline", href: PAYMENT_PATH, "Manage Booking" }
                }
            }
        }
    }
}

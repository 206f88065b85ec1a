//! Seat browsing and payment pages. Their content is served by the seating
//! and payment services; the client provides the guarded shell around it.

use dioxus::prelude::*;

use super::MemberNavbar;

#[component]
pub fn Seating() -> Element {
    rsx! {
        MemberNavbar {}
        main {
            class: "page",
            h1 { "Browse Available Seats" }
            p { class: "text-secondary", "Pick an open seat at any table to hold it for your booking." }
            div { id: "seating-chart", class: "card" }
            a { class: "btn btn-outline", href: "/student/dashboard", "Back to Dashboard" }
        }
    }
}

#[component]
pub fn Payment() -> Element {
    rsx! {
        MemberNavbar {}
        main {
            class: "page",
            h1 { "Complete Payment" }
            p { class: "text-secondary", "Your seat is held until payment is completed." }
            div { id: "payment-form", class: "card" }
            a { class: "btn btn-outline", href: "/student/dashboard", "Back to Dashboard" }
        }
    }
}

//! Public landing page.

use dioxus::prelude::*;
use ui::{NavLinks, Navbar};

#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {
            NavLinks {}
        }

        main {
            class: "hero",
            h1 { "Prom Night Seating" }
            p {
                class: "hero-subtitle",
                "Reserve your table, pay for your ticket, and see who you're sitting with."
            }
            div {
                class: "hero-actions",
                a { class: "btn btn-primary", href: "/register", "Create an Account" }
                a { class: "btn btn-outline", href: "#how-it-works", "How It Works" }
            }
        }

        section {
            id: "how-it-works",
            class: "steps",
            div { class: "step", h3 { "1. Sign up" } p { "Register with your school email and student ID." } }
            div { class: "step", h3 { "2. Pick a seat" } p { "Browse the seating chart and hold an open seat." } }
            div { class: "step", h3 { "3. Pay" } p { "Complete payment to confirm your ticket." } }
        }
    }
}

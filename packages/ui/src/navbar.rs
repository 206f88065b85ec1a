use dioxus::prelude::*;
use store::{Session, SessionStore};

use crate::auth::LogoutButton;
use crate::session::make_session_store;

/// What the landing page's nav call-to-action shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Guest,
    Member { dashboard: &'static str },
}

pub fn nav_state(session: Option<&Session>) -> NavState {
    match session {
        Some(session) => NavState::Member {
            dashboard: session.role().dashboard_path(),
        },
        None => NavState::Guest,
    }
}

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            a { class: "nav-brand", href: "/", "DAWSS Prom Seating" }
            {children}
        }
    }
}

/// The nav call-to-action: Login/Register for guests, Dashboard/Logout for members.
#[component]
pub fn NavLinks() -> Element {
    let links = match nav_state(make_session_store().load().as_ref()) {
        NavState::Guest => rsx! {
            a { class: "btn btn-outline", href: "/login", "Login" }
            a { class: "btn btn-primary", href: "/register", "Register" }
        },
        NavState::Member { dashboard } => rsx! {
            a { class: "btn btn-primary", href: "{dashboard}", "Go to Dashboard" }
            LogoutButton {}
        },
    };

    rsx! {
        div {
            class: "nav-links",
            {links}
        }
    }
}

//! # AuthGate: the page-load session check
//!
//! Every routed page renders inside [`AuthGate`]. During its own render, before
//! any child component runs, the gate loads the session and decides whether the
//! visitor may stay on the page:
//!
//! | Session | Page | Decision |
//! |---------|------|----------|
//! | present | `/login`, `/register` | redirect to the role's dashboard |
//! | absent | `/student/*`, `/admin/*` | redirect to `/login` |
//! | admin | `/student/*` | redirect to `/admin/dashboard` |
//! | anything else | | proceed |
//!
//! The check is one-shot: it guards what the browser renders, not the API,
//! which enforces authorization on its own.

use dioxus::prelude::*;
use store::{Role, Session, SessionStore};

use crate::platform::navigate_to;
use crate::session::make_session_store;

pub const LOGIN_PATH: &str = "/login";

/// How a path is treated by the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// `/login` and `/register`.
    Auth,
    /// Anything under `/student`.
    Student,
    /// Anything under `/admin`.
    Admin,
    /// Everything else, including `/`.
    Public,
}

impl PageKind {
    pub fn classify(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let under = |prefix: &str| {
            path == prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        };
        match path {
            "/login" | "/register" => PageKind::Auth,
            _ if under("/student") => PageKind::Student,
            _ if under("/admin") => PageKind::Admin,
            _ => PageKind::Public,
        }
    }

    pub fn is_protected(self) -> bool {
        matches!(self, PageKind::Student | PageKind::Admin)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decide what to do with a visitor on `path`.
pub fn evaluate(path: &str, session: Option<&Session>) -> GateDecision {
    let page = PageKind::classify(path);
    match (page, session) {
        (PageKind::Auth, Some(session)) => GateDecision::Redirect(session.role().dashboard_path()),
        (page, None) if page.is_protected() => GateDecision::Redirect(LOGIN_PATH),
        (PageKind::Student, Some(session)) if session.role() == Role::Admin => {
            GateDecision::Redirect(Role::Admin.dashboard_path())
        }
        _ => GateDecision::Proceed,
    }
}

/// Render `children` only if the visitor may stay on `path`.
#[component]
pub fn AuthGate(path: String, children: Element) -> Element {
    let session = make_session_store().load();

    match evaluate(&path, session.as_ref()) {
        GateDecision::Proceed => rsx! {
            {children}
        },
        GateDecision::Redirect(target) => {
            tracing::info!("Redirecting from {path} to {target}");
            navigate_to(target);
            rsx! {}
        }
    }
}

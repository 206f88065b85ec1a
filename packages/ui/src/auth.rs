//! Client context, session hooks and logout for the UI.

use api::HttpApi;
use dioxus::prelude::*;
use store::{DawssConfig, Session, SessionStore};

use crate::platform::{navigate_to, resolve_base_url};
use crate::session::make_session_store;

pub const HOME_PATH: &str = "/";

/// Get the client configuration provided by [`ClientProvider`].
pub fn use_config() -> DawssConfig {
    use_context::<DawssConfig>()
}

/// Get the API client provided by [`ClientProvider`].
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}

/// The session as it was when the component mounted.
pub fn use_session() -> Option<Session> {
    use_hook(|| make_session_store().load())
}

/// Provider component for the configuration and the API client.
/// Wrap your app with this component before any page renders.
#[component]
pub fn ClientProvider(config: DawssConfig, children: Element) -> Element {
    let base_url = resolve_base_url(&config.api.base_url);
    use_context_provider(|| {
        tracing::info!("Using API at {base_url}");
        HttpApi::new(base_url)
    });
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}

/// Forget the session and go back to the landing page.
pub fn logout() {
    make_session_store().clear();
    tracing::info!("Logged out");
    navigate_to(HOME_PATH);
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "btn btn-outline".to_string())] class: String,
) -> Element {
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| logout(),
            "{label}"
        }
    }
}

/// "Hello, {name}" for the header of protected pages.
#[component]
pub fn Greeting() -> Element {
    let name = use_session().map(|session| session.user.full_name);

    rsx! {
        if let Some(name) = name {
            span {
                id: "user-name",
                class: "user-name",
                "Hello, {name}"
            }
        }
    }
}

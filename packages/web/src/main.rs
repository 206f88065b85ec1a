use dioxus::prelude::*;

use store::DawssConfig;
use ui::{AuthGate, ClientProvider};
use views::{AdminDashboard, Home, Login, NotFound, Payment, Register, Seating, StudentDashboard};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guarded)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/student/dashboard")]
        StudentDashboard {},
        #[route("/student/seating")]
        Seating {},
        #[route("/student/booking")]
        Payment {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../dawss.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> DawssConfig {
    DawssConfig::parse_or_default(CONFIG_TOML)
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Runs the session check for the current route before the page renders.
#[component]
fn Guarded() -> Element {
    let route = use_route::<Route>();

    rsx! {
        AuthGate {
            path: route.to_string(),
            Outlet::<Route> {}
        }
    }
}

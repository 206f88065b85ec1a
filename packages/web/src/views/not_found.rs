use dioxus::prelude::*;
use ui::Navbar;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Navbar {
            div {
                class: "nav-links",
                a { class: "btn btn-outline", href: "/login", "Login" }
                a { class: "btn btn-primary", href: "/register", "Register" }
            }
        }
        main {
            class: "page",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            a { class: "btn btn-primary", href: "/", "Back to home" }
        }
    }
}

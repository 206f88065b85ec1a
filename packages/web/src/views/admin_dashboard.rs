use dioxus::prelude::*;

use super::MemberNavbar;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        MemberNavbar {}
        main {
            class: "page dashboard",
            h1 { "Admin Dashboard" }
            p { class: "text-secondary", "Seat assignments, payments and table layout." }
            div { id: "admin-stats", class: "card" }
        }
    }
}

use dioxus::prelude::*;
use ui::{Greeting, LogoutButton, Navbar};

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod student_dashboard;
pub use student_dashboard::StudentDashboard;

mod student_pages;
pub use student_pages::{Payment, Seating};

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod not_found;
pub use not_found::NotFound;

/// Navbar for pages behind the login: greeting and logout.
#[component]
pub(crate) fn MemberNavbar() -> Element {
    rsx! {
        Navbar {
            div {
                class: "nav-links",
                Greeting {}
                LogoutButton {}
            }
        }
    }
}

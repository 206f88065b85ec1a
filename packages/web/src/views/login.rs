//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::auth_form::submit_login;
use ui::platform::navigate_to;
use ui::{
    make_session_store, show_error, use_api, use_config, use_flash_messages, FormKind, LoginForm,
    LoginOutcome, MessageSlots,
};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let config = use_config();
    let flash = use_flash_messages();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let error_timeout = config.ui.error_timeout();
        busy.set(true);
        spawn(async move {
            let form = LoginForm {
                email: email(),
                password: password(),
            };
            match submit_login(&api, &make_session_store(), &form).await {
                LoginOutcome::Authenticated { redirect, .. } => navigate_to(redirect),
                LoginOutcome::Failed(message) => {
                    show_error(flash, message, error_timeout);
                    busy.set(false);
                }
            }
        });
    };

    let button_label = FormKind::Login.label(busy());

    rsx! {
        main {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "Welcome Back" }
                p { class: "text-secondary", "Sign in to manage your prom seat." }

                MessageSlots { flash }

                form {
                    id: "login-form",
                    onsubmit: handle_login,

                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    button {
                        id: "login-btn",
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy(),
                        "{button_label}"
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    a { href: "/register", "Register here" }
                }
            }
        }
    }
}

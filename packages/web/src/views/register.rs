//! Registration page view with the student sign-up form.

use dioxus::prelude::*;
use ui::auth_form::{submit_register, ACCOUNT_CREATED};
use ui::gate::LOGIN_PATH;
use ui::platform::{navigate_to, sleep};
use ui::{
    show_error, show_success, use_api, use_config, use_flash_messages, FormKind, MessageSlots,
    RegisterForm, RegisterOutcome,
};

/// Register page component.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let config = use_config();
    let flash = use_flash_messages();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut student_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let error_timeout = config.ui.error_timeout();
        let redirect_delay = config.ui.register_redirect_delay();

        let form = RegisterForm {
            full_name: full_name(),
            email: email(),
            student_id: student_id(),
            password: password(),
            confirm_password: confirm_password(),
        };
        if let Err(e) = form.to_request() {
            show_error(flash, e.to_string(), error_timeout);
            return;
        }

        let api = api.clone();
        busy.set(true);
        spawn(async move {
            match submit_register(&api, &form).await {
                RegisterOutcome::Created => {
                    show_success(flash, ACCOUNT_CREATED);
                    sleep(redirect_delay).await;
                    navigate_to(LOGIN_PATH);
                }
                RegisterOutcome::Invalid(message) | RegisterOutcome::Failed(message) => {
                    show_error(flash, message, error_timeout);
                    busy.set(false);
                }
            }
        });
    };

    let button_label = FormKind::Register.label(busy());

    rsx! {
        main {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "Create Account" }
                p { class: "text-secondary", "Register to reserve your prom seat." }

                MessageSlots { flash }

                form {
                    id: "register-form",
                    onsubmit: handle_register,

                    label { r#for: "full_name", "Full Name" }
                    input {
                        id: "full_name",
                        r#type: "text",
                        required: true,
                        value: full_name(),
                        oninput: move |evt: FormEvent| full_name.set(evt.value()),
                    }

                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { r#for: "student_id", "Student ID (optional)" }
                    input {
                        id: "student_id",
                        r#type: "text",
                        value: student_id(),
                        oninput: move |evt: FormEvent| student_id.set(evt.value()),
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    label { r#for: "confirm_password", "Confirm Password" }
                    input {
                        id: "confirm_password",
                        r#type: "password",
                        required: true,
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }

                    button {
                        id: "register-btn",
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy(),
                        "{button_label}"
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    a { href: "/login", "Login here" }
                }
            }
        }
    }
}

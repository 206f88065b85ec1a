use std::time::Duration;

use dioxus::prelude::*;

use crate::platform::sleep;

/// The error and success slots of a form page.
///
/// Each error gets a generation number so that the timer of an older error
/// cannot hide a newer one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashMessages {
    pub error: Option<String>,
    pub success: Option<String>,
    generation: u64,
}

impl FlashMessages {
    /// Show `message` in the error slot; returns the generation to expire later.
    pub fn set_error(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.error = Some(message.into());
        self.generation
    }

    /// Hide the error slot if it still shows the error of `generation`.
    pub fn expire_error(&mut self, generation: u64) {
        if self.generation == generation {
            self.error = None;
        }
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }
}

pub fn use_flash_messages() -> Signal<FlashMessages> {
    use_signal(FlashMessages::default)
}

/// Put `message` in the error slot and hide it again after `timeout`.
pub fn show_error(mut flash: Signal<FlashMessages>, message: impl Into<String>, timeout: Duration) {
    let generation = flash.write().set_error(message);
    spawn(async move {
        sleep(timeout).await;
        flash.write().expire_error(generation);
    });
}

pub fn show_success(mut flash: Signal<FlashMessages>, message: impl Into<String>) {
    flash.write().set_success(message);
}

#[component]
pub fn MessageSlots(flash: Signal<FlashMessages>) -> Element {
    let FlashMessages { error, success, .. } = flash();

    rsx! {
        if let Some(error) = error {
            div {
                id: "error-message",
                class: "error-message",
                "{error}"
            }
        }
        if let Some(success) = success {
            div {
                id: "success-message",
                class: "success-message",
                "{success}"
            }
        }
    }
}

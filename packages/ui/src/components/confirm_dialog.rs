use dioxus::prelude::*;

use super::{Button, ButtonVariant};
use crate::views::ModalOverlay;

/// Two-button modal prompt. Clicking outside the card counts as cancel.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "OK".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    /// Disable both actions while the confirmed action runs.
    #[props(default)]
    busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if !busy {
                    on_cancel.call(());
                }
            },
            div {
                class: "dialog",
                role: "alertdialog",
                h2 { class: "dialog__title", "{title}" }
                p { class: "dialog__message", "{message}" }
                div {
                    class: "dialog__actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

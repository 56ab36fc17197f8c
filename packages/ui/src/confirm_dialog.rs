use dioxus::prelude::*;
use store::Confirmation;

use crate::components::{Button, ButtonVariant, ModalOverlay};

/// Yes/no dialog. Dismissing the overlay counts as [`Confirmation::Cancelled`].
#[component]
pub fn ConfirmDialog(
    #[props(into)] title: String,
    #[props(into)] message: String,
    #[props(into, default = "Confirm".to_string())] confirm_label: String,
    #[props(default)] destructive: bool,
    on_close: EventHandler<Confirmation>,
) -> Element {
    let variant = if destructive {
        ButtonVariant::Destructive
    } else {
        ButtonVariant::Primary
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(Confirmation::Cancelled),
            div {
                class: "dialog",
                h2 { class: "dialog-title", "{title}" }
                p { class: "dialog-message", "{message}" }
                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(Confirmation::Cancelled),
                        "Cancel"
                    }
                    Button {
                        variant,
                        onclick: move |_| on_close.call(Confirmation::Confirmed),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

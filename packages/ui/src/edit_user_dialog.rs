use dioxus::prelude::*;
use store::{DialogResult, User, UserEdit};

use crate::components::{Button, ButtonVariant, ModalOverlay};

/// Form for the cosmetic user update, prefilled from `user`.
///
/// Save stays disabled until all three fields are non-empty.
#[component]
pub fn EditUserDialog(user: User, on_close: EventHandler<DialogResult<UserEdit>>) -> Element {
    let mut draft = use_signal(|| UserEdit::from_user(&user));
    let complete = draft.read().is_complete();

    let handle_submit = move |_| {
        let edit = draft();
        if edit.is_complete() {
            on_close.call(DialogResult::Submitted(edit));
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(DialogResult::Cancelled),
            div {
                class: "dialog",
                h2 { class: "dialog-title", "Update User" }

                div {
                    class: "form-field",
                    label { r#for: "edit-user-name", "Name" }
                    input {
                        id: "edit-user-name",
                        r#type: "text",
                        value: draft.read().name.clone(),
                        oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "edit-user-email", "Email" }
                    input {
                        id: "edit-user-email",
                        r#type: "email",
                        value: draft.read().email.clone(),
                        oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "edit-user-password", "Password" }
                    input {
                        id: "edit-user-password",
                        r#type: "text",
                        value: draft.read().password.clone(),
                        oninput: move |evt: FormEvent| draft.write().password = evt.value(),
                    }
                }

                if !complete {
                    p { class: "dialog-hint", "All three fields are required." }
                }

                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(DialogResult::Cancelled),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !complete,
                        onclick: handle_submit,
                        "Save"
                    }
                }
            }
        }
    }
}

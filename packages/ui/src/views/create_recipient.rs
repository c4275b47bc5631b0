use api::{ApiClient, Recipient};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ConfirmDialog, FieldError, Input, Label, Spinner, Textarea};
use crate::flows::recipient::{self, FollowUpChoice, RecipientForm, RecipientFormErrors};

/// Recipient registration form.
///
/// After the recipient is created the user is offered a parcel for them.
/// `on_parcel_created` receives the new tracking number; the platform package
/// navigates to the tracking screen with it.
#[component]
pub fn CreateRecipientView(on_parcel_created: EventHandler<String>) -> Element {
    let service = use_context::<ApiClient>();
    let mut form = use_signal(RecipientForm::default);
    let mut errors = use_signal(RecipientFormErrors::default);
    let mut submitting = use_signal(|| false);
    let mut submit_error = use_signal(|| Option::<String>::None);
    // Some while the follow-up dialog is open.
    let mut created = use_signal(|| Option::<Recipient>::None);
    let mut creating_parcel = use_signal(|| false);

    let submit_service = service.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if *submitting.peek() {
            return;
        }
        let body = match form.peek().validate() {
            Ok(body) => body,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(RecipientFormErrors::default());
        submit_error.set(None);
        submitting.set(true);
        let service = submit_service.clone();
        spawn(async move {
            match recipient::create_recipient(&service, &body).await {
                Ok(r) => created.set(Some(r)),
                Err(message) => submit_error.set(Some(message)),
            }
            submitting.set(false);
        });
    };

    let close_dialog = use_callback(move |choice: FollowUpChoice| {
        if *creating_parcel.peek() {
            return;
        }
        let Some(new_recipient) = created() else {
            return;
        };
        creating_parcel.set(true);
        let service = service.clone();
        spawn(async move {
            let mut current = form();
            let next = recipient::close_follow_up(&service, &mut current, &new_recipient, choice).await;
            form.set(current);
            errors.set(RecipientFormErrors::default());
            created.set(None);
            creating_parcel.set(false);
            if let Some(track_number) = next {
                on_parcel_created.call(track_number);
            }
        });
    });

    rsx! {
        div {
            class: "screen",
            h1 { class: "screen__title", "Add recipient" }

            form {
                class: "form",
                onsubmit: handle_submit,

                if let Some(err) = submit_error() {
                    div { class: "alert alert--error", "{err}" }
                }

                div {
                    class: "form__group",
                    Label { html_for: "recipient-name", "Name" }
                    Input {
                        id: "recipient-name",
                        placeholder: "Enter the recipient's name",
                        value: form().name,
                        invalid: errors().name.is_some(),
                        autocapitalize: "words",
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    FieldError { message: errors().name }
                }

                div {
                    class: "form__group",
                    Label { html_for: "recipient-address", "Address" }
                    Textarea {
                        id: "recipient-address",
                        placeholder: "Enter the recipient's address",
                        value: form().address,
                        invalid: errors().address.is_some(),
                        rows: 3,
                        oninput: move |evt: FormEvent| form.write().address = evt.value(),
                    }
                    FieldError { message: errors().address }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "form__submit",
                    submit: true,
                    disabled: submitting(),
                    if submitting() {
                        Spinner {}
                    } else {
                        "Create"
                    }
                }
            }
        }

        if created().is_some() {
            ConfirmDialog {
                title: "Success",
                message: "Recipient added! Would you like to add a parcel?",
                busy: creating_parcel(),
                on_confirm: move |_| close_dialog.call(FollowUpChoice::AddParcel),
                on_cancel: move |_| close_dialog.call(FollowUpChoice::Dismiss),
            }
        }
    }
}

use api::{ApiClient, Id};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, FieldError, Input, Label, Spinner};
use crate::flows::document::download_and_share;
use crate::flows::tracking::{self, TrackingState};
use crate::icons::FaCloudArrowDown;
use crate::webview::PlatformShare;
use crate::{make_document_store, Icon};

/// Tracking number lookup.
///
/// A non-empty `track_number` (from navigation) fills the form and runs the
/// lookup straight away.
#[component]
pub fn TrackingView(#[props(default)] track_number: String) -> Element {
    let service = use_context::<ApiClient>();
    let mut input = use_signal(String::new);
    let mut field_error = use_signal(|| Option::<&'static str>::None);
    let mut state = use_signal(TrackingState::default);

    let mut requested = use_signal(|| track_number.clone());
    if *requested.peek() != track_number {
        requested.set(track_number.clone());
    }

    let lookup_service = service.clone();
    let lookup = use_callback(move |number: String| {
        if !state.write().begin() {
            return;
        }
        let service = lookup_service.clone();
        spawn(async move {
            state.set(tracking::track(&service, &number).await);
        });
    });

    use_effect(move || {
        if let Some(number) = tracking::prefill(&requested()) {
            input.set(number.clone());
            field_error.set(None);
            lookup.call(number);
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match tracking::validate_track_number(&input()) {
            Ok(number) => {
                field_error.set(None);
                lookup.call(number);
            }
            Err(message) => field_error.set(Some(message)),
        }
    };

    let handle_reset = move |_| {
        input.set(String::new());
        field_error.set(None);
        state.set(TrackingState::Idle);
    };

    let download = use_callback(move |parcel_id: Id| {
        let service = service.clone();
        spawn(async move {
            let store = make_document_store();
            download_and_share(&service, &store, &PlatformShare, &parcel_id).await;
        });
    });

    let current = state();

    rsx! {
        div {
            class: "screen",
            h1 { class: "screen__title", "Parcel tracking" }
            p { class: "screen__subtitle", "Enter a tracking number to get the current parcel status" }

            form {
                class: "form",
                onsubmit: handle_submit,

                div {
                    class: "form__group",
                    Label { html_for: "track-number", "Tracking number" }
                    Input {
                        id: "track-number",
                        placeholder: "Enter the tracking number",
                        value: input(),
                        invalid: field_error().is_some(),
                        autocapitalize: "characters",
                        oninput: move |evt: FormEvent| input.set(evt.value()),
                    }
                    FieldError { message: field_error() }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "form__submit",
                    submit: true,
                    disabled: current.is_loading(),
                    if current.is_loading() {
                        Spinner {}
                    } else {
                        "Find parcel"
                    }
                }
            }

            if let Some(err) = current.error() {
                div { class: "alert alert--error", "{err}" }
            }

            if let Some(result) = current.result().cloned() {
                div {
                    class: "result",
                    div {
                        class: "result__header",
                        h2 { class: "result__title", "Parcel information" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: handle_reset,
                            "Track another"
                        }
                    }
                    div {
                        class: "card",
                        div {
                            class: "card__row",
                            span { class: "card__label", "Tracking number" }
                            span { class: "card__value", "{result.track_number}" }
                        }
                        div {
                            class: "card__row",
                            span { class: "card__label", "Status:" }
                            span { class: "card__value card__value--status", "{result.status}" }
                        }
                        div {
                            class: "card__row",
                            span { class: "card__label", "Recipient:" }
                            span { class: "card__value", "{result.recipient}" }
                        }
                        div {
                            class: "card__row",
                            Button {
                                variant: ButtonVariant::Ghost,
                                title: "Download label",
                                onclick: {
                                    let id = result.id.clone();
                                    move |_| download.call(id.clone())
                                },
                                Icon { icon: FaCloudArrowDown, width: 20, height: 20 }
                            }
                        }
                    }
                }
            }
        }
    }
}

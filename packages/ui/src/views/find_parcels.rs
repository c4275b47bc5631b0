use api::{ApiClient, Id};
use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, FieldError, Input, Label, Spinner, ToastOptions};
use crate::flows::clipboard::copy_tracking_number;
use crate::flows::document::download_and_share;
use crate::flows::search::{self, SearchState};
use crate::icons::{FaCloudArrowDown, FaCopy};
use crate::webview::{PlatformShare, WebviewClipboard};
use crate::{make_document_store, Icon};

#[component]
pub fn FindParcelsView() -> Element {
    let service = use_context::<ApiClient>();
    let toast = use_toast();
    let mut input = use_signal(String::new);
    let mut field_error = use_signal(|| Option::<&'static str>::None);
    let mut state = use_signal(SearchState::default);

    let search_service = service.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let name = match search::validate_recipient_name(&input()) {
            Ok(name) => name,
            Err(message) => {
                field_error.set(Some(message));
                return;
            }
        };
        field_error.set(None);
        if !state.write().begin() {
            return;
        }
        let service = search_service.clone();
        spawn(async move {
            state.set(search::search(&service, &name).await);
        });
    };

    let copy = use_callback(move |track_number: String| {
        spawn(async move {
            copy_tracking_number(&WebviewClipboard, &track_number, |notice| {
                toast.success(notice.to_string(), ToastOptions::new());
            })
            .await;
        });
    });

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
            h1 { class: "screen__title", "Find parcels" }

            form {
                class: "form",
                onsubmit: handle_submit,

                div {
                    class: "form__group",
                    Label { html_for: "recipient-search", "Recipient name" }
                    Input {
                        id: "recipient-search",
                        placeholder: "Enter the recipient's name",
                        value: input(),
                        invalid: field_error().is_some(),
                        autocapitalize: "words",
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
                        "Search"
                    }
                }
            }

            if current.is_no_results() {
                p { class: "empty", "No results" }
            }

            ul {
                class: "parcel-list",
                for row in current.rows().iter().cloned() {
                    li {
                        key: "{row.id}",
                        class: "parcel-list__item",
                        div {
                            class: "parcel-list__info",
                            button {
                                class: "parcel-list__track",
                                r#type: "button",
                                title: "Copy tracking number",
                                onclick: {
                                    let track_number = row.track_number.clone();
                                    move |_| copy.call(track_number.clone())
                                },
                                span { "{row.track_number}" }
                                Icon { icon: FaCopy, width: 14, height: 14 }
                            }
                            span { class: "parcel-list__status", "Status: {row.status}" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            title: "Download label",
                            onclick: {
                                let id = row.id.clone();
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

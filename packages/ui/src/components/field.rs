use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] invalid: bool,
    /// Keyboard capitalisation hint (`"characters"`, `"words"`, ...).
    #[props(default = "sentences".to_string())]
    autocapitalize: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: if invalid { "input input--invalid" } else { "input" },
            r#type: "text",
            placeholder: "{placeholder}",
            autocapitalize: "{autocapitalize}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] invalid: bool,
    #[props(default = 3)] rows: u32,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: if invalid { "input input--invalid" } else { "input" },
            rows: "{rows}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Validation message under a field; renders nothing when there is none.
#[component]
pub fn FieldError(message: Option<&'static str>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", "{message}" }
        }
    }
}

//! This crate contains all shared UI for the workspace.
//!
//! Screen logic lives in [`flows`] and talks to [`api::ParcelService`] and
//! [`store::DocumentStore`] only; [`views`] wires it to Dioxus components.

pub mod components;
pub mod flows;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod service;
pub use service::{load_config, make_document_store, make_service, LabelStore};

#[cfg(target_os = "android")]
mod android;

mod webview;
pub use webview::{PlatformShare, WebviewClipboard};

//! Form and feedback primitives shared by every screen.

use dioxus::prelude::*;

mod button;
pub use button::{Button, ButtonVariant, Spinner};

mod field;
pub use field::{FieldError, Input, Label, Textarea};

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};

pub const COMPONENTS_CSS: Asset = asset!("/src/components/components.css");

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod tab_layout;
pub use tab_layout::{Tab, TabLayoutView};

mod create_recipient;
pub use create_recipient::CreateRecipientView;

mod tracking;
pub use tracking::TrackingView;

mod find_parcels;
pub use find_parcels::FindParcelsView;

use dioxus::prelude::*;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

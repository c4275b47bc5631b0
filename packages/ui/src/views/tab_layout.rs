use dioxus::prelude::*;

use crate::icons::{FaMagnifyingGlass, FaBox, FaUserPlus};
use crate::Icon;

/// The three top-level screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    CreateRecipient,
    TrackParcel,
    FindParcels,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::CreateRecipient, Tab::TrackParcel, Tab::FindParcels];

    /// Screen title.
    pub fn title(self) -> &'static str {
        match self {
            Tab::CreateRecipient => "New recipient",
            Tab::TrackParcel => "Track a parcel",
            Tab::FindParcels => "Find a parcel",
        }
    }

    /// Tab bar label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::CreateRecipient => "Add recipient",
            Tab::TrackParcel => "Track",
            Tab::FindParcels => "Search",
        }
    }
}

#[component]
fn TabIcon(tab: Tab) -> Element {
    match tab {
        Tab::CreateRecipient => rsx! { Icon { icon: FaUserPlus, width: 22, height: 22 } },
        Tab::TrackParcel => rsx! { Icon { icon: FaBox, width: 22, height: 22 } },
        Tab::FindParcels => rsx! { Icon { icon: FaMagnifyingGlass, width: 22, height: 22 } },
    }
}

/// Screen area with a bottom tab bar.
///
/// Platform packages map their routes onto [`Tab`] and pass an `Outlet` as children.
#[component]
pub fn TabLayoutView(active: Tab, on_select: EventHandler<Tab>, children: Element) -> Element {
    rsx! {
        div {
            class: "tab-layout",
            main { class: "tab-layout__content", {children} }
            nav {
                class: "tab-bar",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if tab == active { "tab-bar__item tab-bar__item--active" } else { "tab-bar__item" },
                        title: tab.title(),
                        onclick: move |_| on_select.call(tab),
                        TabIcon { tab }
                        span { class: "tab-bar__label", "{tab.label()}" }
                    }
                }
            }
        }
    }
}

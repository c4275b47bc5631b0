use dioxus::prelude::*;
use ui::views::{CreateRecipientView, FindParcelsView, Tab, TabLayoutView, TrackingView};

use crate::Route;

fn route_for(tab: Tab) -> Route {
    match tab {
        Tab::CreateRecipient => Route::CreateRecipient {},
        Tab::TrackParcel => Route::TrackParcel {
            track_number: String::new(),
        },
        Tab::FindParcels => Route::FindParcels {},
    }
}

#[component]
pub fn TabLayout() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let active = match route {
        Route::CreateRecipient {} => Tab::CreateRecipient,
        Route::TrackParcel { .. } => Tab::TrackParcel,
        Route::FindParcels {} => Tab::FindParcels,
    };

    rsx! {
        TabLayoutView {
            active,
            on_select: move |tab| {
                nav.push(route_for(tab));
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn CreateRecipient() -> Element {
    let nav = use_navigator();
    rsx! {
        CreateRecipientView {
            on_parcel_created: move |track_number| {
                nav.push(Route::TrackParcel { track_number });
            },
        }
    }
}

#[component]
pub fn TrackParcel(track_number: String) -> Element {
    rsx! {
        TrackingView { track_number }
    }
}

#[component]
pub fn FindParcels() -> Element {
    rsx! {
        FindParcelsView {}
    }
}

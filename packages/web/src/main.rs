use dioxus::prelude::*;
use views::{CreateRecipient, FindParcels, TabLayout, TrackParcel};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(TabLayout)]
        #[route("/")]
        CreateRecipient {},
        #[route("/track?:track_number")]
        TrackParcel { track_number: String },
        #[route("/search")]
        FindParcels {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ui::make_service);

    rsx! {
        // Global app resources
        document::Title { "Parcels" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Link { rel: "stylesheet", href: ui::components::COMPONENTS_CSS }
        document::Link { rel: "stylesheet", href: ui::views::VIEWS_CSS }

        ui::components::ToastProvider {
            Router::<Route> {}
        }
    }
}

use dioxus::prelude::*;

use crate::client::{identity::IdentityProvider, router::Route};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        IdentityProvider {
            Router::<Route> {}
        }
    }
}

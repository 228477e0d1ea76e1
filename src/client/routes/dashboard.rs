use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn Dashboard() -> Element {
    rsx!(
        Title { "Dashboard | QuickStay" }
        Page {
            h1 { class: "text-3xl md:text-4xl font-semibold",
                "Dashboard"
            }
            p { class: "text-sm md:text-base text-gray-500/90 mt-2",
                "Monitor your room listings, track bookings and analyze revenue."
            }
        }
    )
}

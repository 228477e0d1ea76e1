use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn Rooms() -> Element {
    rsx!(
        Title { "Hotels | QuickStay" }
        Page {
            h1 { class: "text-3xl md:text-4xl font-semibold",
                "Hotel Rooms"
            }
            p { class: "text-sm md:text-base text-gray-500/90 mt-2 max-w-174",
                "Take advantage of our limited-time offers and special packages to enhance your stay."
            }
        }
    )
}

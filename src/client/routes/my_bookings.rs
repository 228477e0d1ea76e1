use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

#[component]
pub fn MyBookings() -> Element {
    rsx!(
        Title { "My Bookings | QuickStay" }
        Page {
            h1 { class: "text-3xl md:text-4xl font-semibold",
                "My Bookings"
            }
            p { class: "text-sm md:text-base text-gray-500/90 mt-2",
                "Easily manage your past, current, and upcoming hotel reservations in one place."
            }
        }
    )
}

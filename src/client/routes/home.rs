use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "QuickStay" }
        Meta {
            name: "description",
            content: "Find and book hotel rooms with QuickStay."
        }
        Page { class: "flex flex-col items-start justify-center gap-4 bg-slate-500 text-white",
            p { class: "bg-white/50 px-3.5 py-1 rounded-full",
                "The Ultimate Hotel Experience"
            }
            h1 { class: "text-2xl md:text-5xl font-bold max-w-xl",
                "Discover Your Perfect Getaway Destination"
            }
            p { class: "max-w-130 text-sm md:text-base",
                "Unparalleled luxury and comfort await at the world's most exclusive hotels and resorts."
            }
            Link {
                to: Route::Rooms {},
                class: "px-6 py-2.5 rounded-full bg-white text-black",
                "Browse hotels"
            }
        }
    )
}

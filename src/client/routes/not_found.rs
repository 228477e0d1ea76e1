use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            h1 { class: "text-2xl font-semibold",
                "Page not found"
            }
            p { class: "text-gray-500",
                "Nothing lives at /{path}"
            }
            Link {
                to: Route::Home {},
                class: "px-6 py-2.5 rounded-full bg-black text-white",
                "Back to home"
            }
        }
    )
}

//! Account menu shown to signed-in users.
//!
//! The widget is configured with an explicit, ordered list of `MenuAction`s. The
//! sign-out entry belongs to the identity provider and is always appended last.

pub mod action;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBook, FaRightFromBracket};
use dioxus_free_icons::Icon;

pub use action::{menu_entries, MenuAction, MenuIcon, MenuTarget, RouteNavigator};

use crate::{client::identity::use_identity, model::user::UserDto};

#[component]
pub fn AccountMenu(user: UserDto, actions: Vec<MenuAction>) -> Element {
    let identity = use_identity();
    let navigator = navigator();
    let mut open = use_signal(|| false);

    let entries = menu_entries(&actions);

    rsx!(
        div { class: "relative",
            button {
                r#type: "button",
                class: "flex items-center justify-center w-8 h-8 rounded-full overflow-hidden bg-gray-800 text-white text-sm font-semibold cursor-pointer",
                aria_label: "Open account menu",
                aria_expanded: "{open()}",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                if let Some(src) = user.image_url.clone() {
                    img {
                        class: "w-full h-full object-cover",
                        src: "{src}",
                        alt: "{user.name}"
                    }
                } else {
                    span { "{user.initial()}" }
                }
            }
            if open() {
                div {
                    class: "absolute right-0 mt-2 w-64 rounded-xl bg-white text-gray-700 shadow-lg border border-gray-100 z-70",
                    div { class: "px-4 py-3 border-b border-gray-100",
                        p { class: "text-sm font-semibold text-gray-900",
                            "{user.name}"
                        }
                        if let Some(email) = user.email.clone() {
                            p { class: "text-xs text-gray-500 truncate",
                                "{email}"
                            }
                        }
                    }
                    ul { class: "py-1",
                        {entries.into_iter().map(|entry| {
                            let client = identity.client();
                            let navigator = navigator.clone();
                            let label = entry.label;
                            let icon = entry.icon;

                            rsx! {
                                li { key: "{label}",
                                    button {
                                        r#type: "button",
                                        class: "flex w-full items-center gap-3 px-4 py-2 text-sm hover:bg-gray-50 cursor-pointer",
                                        onclick: move |_| {
                                            open.set(false);
                                            entry.activate(&navigator, client.as_ref());
                                        },
                                        MenuEntryIcon { icon }
                                        "{label}"
                                    }
                                }
                            }
                        })}
                    }
                }
            }
        }
    )
}

#[component]
fn MenuEntryIcon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Book => rsx!(
            span { class: "text-gray-700",
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaBook
                }
            }
        ),
        MenuIcon::SignOut => rsx!(
            span { class: "text-gray-700",
                Icon {
                    width: 16,
                    height: 16,
                    icon: FaRightFromBracket
                }
            }
        ),
    }
}

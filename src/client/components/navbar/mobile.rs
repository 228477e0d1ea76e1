use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::{
    components::{
        account_menu::AccountMenu,
        navbar::{
            content::{AccountAffordance, HeaderContent},
            links::NavLink,
            state::{login, Layout, MenuState},
            style,
        },
    },
    identity::use_identity,
};

/// Account menu (signed in only) and the hamburger trigger, shown below `md`.
#[component]
pub fn MobileTrigger(account: AccountAffordance, menu: Signal<MenuState>) -> Element {
    let mut menu = menu;

    rsx!(
        div { class: "flex items-center gap-4 md:hidden",
            if let AccountAffordance::Menu { user, actions } = account {
                AccountMenu { user, actions }
            }

            button {
                r#type: "button",
                class: "p-1 cursor-pointer",
                aria_label: "Open menu",
                onclick: move |_| menu.with_mut(|m| m.toggle()),
                Icon {
                    width: 28,
                    height: 28,
                    icon: FaBars
                }
            }
        }
    )
}

/// Full-screen overlay sliding in from the right. Any navigation from it closes it.
#[component]
pub fn MobileMenu(content: HeaderContent, menu: Signal<MenuState>) -> Element {
    let identity = use_identity();
    let mut menu = menu;

    rsx!(
        div { class: style::overlay_class(menu()),
            button {
                r#type: "button",
                class: "absolute top-6 right-6 text-gray-600 cursor-pointer",
                aria_label: "Close menu",
                onclick: move |_| menu.with_mut(|m| m.close()),
                Icon {
                    width: 32,
                    height: 32,
                    icon: FaXmark
                }
            }

            {content.links.into_iter().enumerate().map(|(i, link)| rsx! {
                MobileNavLink {
                    key: "{i}",
                    link,
                    class: "text-2xl hover:text-black transition-colors",
                    menu
                }
            })}

            if let Some(link) = content.dashboard {
                MobileNavLink {
                    link,
                    class: "text-2xl text-blue-600",
                    menu
                }
            } else {
                button {
                    r#type: "button",
                    class: "bg-black text-white px-10 py-3 rounded-full text-lg cursor-pointer",
                    onclick: move |_| {
                        let client = identity.client();
                        menu.with_mut(|m| login(client.as_ref(), m, Layout::Mobile));
                    },
                    "Login"
                }
            }
        }
    )
}

/// Overlay link. Following it also closes the overlay.
#[component]
fn MobileNavLink(link: NavLink, class: String, menu: Signal<MenuState>) -> Element {
    let NavLink { name, route } = link;
    let mut menu = menu;

    rsx!(
        Link {
            to: route,
            class,
            onclick: move |_| menu.with_mut(|m| m.close()),
            "{name}"
        }
    )
}

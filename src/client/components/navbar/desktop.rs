use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{
        account_menu::AccountMenu,
        navbar::{
            content::AccountAffordance,
            links::NavLink,
            state::{login, Layout, MenuState},
            style,
        },
    },
    hooks::ScrollState,
    identity::use_identity,
};

/// Link row, hidden below the `md` breakpoint.
#[component]
pub fn DesktopLinks(
    links: Vec<NavLink>,
    dashboard: Option<NavLink>,
    scroll: ScrollState,
) -> Element {
    rsx!(
        div { class: "hidden md:flex items-center gap-4 lg:gap-8",
            {links.into_iter().enumerate().map(|(i, NavLink { name, route })| rsx! {
                Link {
                    key: "{i}",
                    to: route,
                    class: "group flex flex-col gap-0.5 font-medium",
                    "{name}"
                    div { class: style::link_underline_class(scroll) }
                }
            })}

            if let Some(NavLink { name, route }) = dashboard {
                Link {
                    to: route,
                    class: style::dashboard_pill_class(scroll),
                    "{name}"
                }
            }
        }
    )
}

/// Search icon followed by either the account menu or the login button.
#[component]
pub fn DesktopAccount(
    account: AccountAffordance,
    scroll: ScrollState,
    menu: Signal<MenuState>,
) -> Element {
    let identity = use_identity();
    let mut menu = menu;

    let control = match account {
        AccountAffordance::Menu { user, actions } => rsx! {
            AccountMenu { user, actions }
        },
        AccountAffordance::Login => rsx! {
            button {
                r#type: "button",
                class: style::login_button_class(scroll),
                onclick: move |_| {
                    let client = identity.client();
                    menu.with_mut(|m| login(client.as_ref(), m, Layout::Desktop));
                },
                "Login"
            }
        },
    };

    rsx!(
        div { class: "hidden md:flex items-center gap-4",
            span { class: "h-6 w-6 cursor-pointer",
                Icon {
                    width: 22,
                    height: 22,
                    icon: FaMagnifyingGlass
                }
            }
            {control}
        }
    )
}

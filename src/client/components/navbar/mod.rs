//! Site header shared by every page.
//!
//! The header is driven by three inputs: the window scroll position (`ScrollState`), the
//! mobile overlay toggle (`MenuState`) and the identity provider's session status. It
//! renders nothing at all until the session status is loaded.

pub mod content;
pub mod desktop;
pub mod links;
pub mod mobile;
pub mod state;
pub mod style;

#[cfg(test)]
mod tests;

use dioxus::prelude::*;

pub use content::{AccountAffordance, HeaderContent};
pub use links::NavLink;
pub use state::{Layout, MenuState};

use crate::client::{
    hooks::use_scroll_state,
    identity::use_identity,
    router::Route,
};

use self::{
    desktop::{DesktopAccount, DesktopLinks},
    mobile::{MobileMenu, MobileTrigger},
};

const LOGO_IMG: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Navbar() -> Element {
    let identity = use_identity();
    let scroll = use_scroll_state();
    let menu = use_signal(MenuState::default);

    let content = HeaderContent::compose(&identity.auth());

    rsx! {
        if let Some(content) = content {
            nav {
                class: style::nav_class(scroll()),
                Link {
                    to: Route::Home {},
                    class: "z-50",
                    img {
                        src: LOGO_IMG,
                        alt: "QuickStay",
                        class: style::logo_class(scroll())
                    }
                }

                DesktopLinks {
                    links: content.links.clone(),
                    dashboard: content.dashboard.clone(),
                    scroll: scroll()
                }
                DesktopAccount {
                    account: content.account.clone(),
                    scroll: scroll(),
                    menu
                }

                MobileTrigger {
                    account: content.account.clone(),
                    menu
                }
                MobileMenu {
                    content: content.clone(),
                    menu
                }
            }
        }

        Outlet::<Route> {}
    }
}

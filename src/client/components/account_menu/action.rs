use dioxus::router::Navigator;

use crate::client::{identity::IdentityClient, router::Route};

/// Anything that can carry out an in-app navigation request.
pub trait RouteNavigator {
    fn navigate(&self, route: Route);
}

impl RouteNavigator for Navigator {
    fn navigate(&self, route: Route) {
        self.push(route);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Book,
    SignOut,
}

/// What happens when a menu entry is activated.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuTarget {
    /// Navigate within the app without a page reload.
    Navigate(Route),
    /// Hand over to the identity provider's sign-out flow.
    SignOut,
}

/// One entry of the account menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuAction {
    pub label: &'static str,
    pub icon: MenuIcon,
    pub on_activate: MenuTarget,
}

impl MenuAction {
    pub fn navigate(label: &'static str, icon: MenuIcon, route: Route) -> Self {
        Self {
            label,
            icon,
            on_activate: MenuTarget::Navigate(route),
        }
    }

    pub fn sign_out() -> Self {
        Self {
            label: "Sign out",
            icon: MenuIcon::SignOut,
            on_activate: MenuTarget::SignOut,
        }
    }

    pub fn activate(&self, navigator: &dyn RouteNavigator, identity: &dyn IdentityClient) {
        match &self.on_activate {
            MenuTarget::Navigate(route) => navigator.navigate(route.clone()),
            MenuTarget::SignOut => identity.sign_out(),
        }
    }
}

/// Custom entries in the given order, followed by the provider's sign-out entry.
pub fn menu_entries(actions: &[MenuAction]) -> Vec<MenuAction> {
    actions
        .iter()
        .cloned()
        .chain(std::iter::once(MenuAction::sign_out()))
        .collect()
}

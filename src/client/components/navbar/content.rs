use crate::{
    client::{
        components::{
            account_menu::{MenuAction, MenuIcon},
            navbar::links::{dashboard_link, nav_links, NavLink},
        },
        identity::AuthState,
        router::Route,
    },
    model::user::UserDto,
};

/// Account control rendered at the end of the header.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountAffordance {
    /// Signed out: a button starting the sign-in flow.
    Login,
    /// Signed in: the account menu with the header's custom actions.
    Menu {
        user: UserDto,
        actions: Vec<MenuAction>,
    },
}

/// Everything the header shows for a given session status.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderContent {
    pub links: Vec<NavLink>,
    pub dashboard: Option<NavLink>,
    pub account: AccountAffordance,
}

impl HeaderContent {
    /// Returns `None` until the session status is loaded, in which case the header renders
    /// nothing at all.
    pub fn compose(auth: &AuthState) -> Option<Self> {
        if !auth.is_loaded() {
            return None;
        }

        let content = match &auth.user {
            Some(user) => Self {
                links: nav_links(),
                dashboard: Some(dashboard_link()),
                account: AccountAffordance::Menu {
                    user: user.clone(),
                    actions: account_actions(),
                },
            },
            None => Self {
                links: nav_links(),
                dashboard: None,
                account: AccountAffordance::Login,
            },
        };

        Some(content)
    }
}

/// Custom entries the header adds to the account menu.
pub fn account_actions() -> Vec<MenuAction> {
    vec![MenuAction::navigate(
        "My Bookings",
        MenuIcon::Book,
        Route::MyBookings {},
    )]
}

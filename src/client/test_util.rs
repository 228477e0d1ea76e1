//! Shared fixtures for client unit tests.

use std::cell::{Cell, RefCell};

use crate::{
    client::{
        components::account_menu::RouteNavigator, identity::IdentityClient, router::Route,
    },
    model::user::UserDto,
};

pub fn test_user() -> UserDto {
    UserDto {
        id: "user_1".to_string(),
        name: "Ada Lovelace".to_string(),
        email: Some("ada@example.com".to_string()),
        image_url: None,
    }
}

/// `IdentityClient` that counts how often each flow was started.
#[derive(Default)]
pub struct RecordingIdentity {
    pub sign_in_calls: Cell<usize>,
    pub sign_out_calls: Cell<usize>,
}

impl IdentityClient for RecordingIdentity {
    fn open_sign_in(&self) {
        self.sign_in_calls.set(self.sign_in_calls.get() + 1);
    }

    fn sign_out(&self) {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
    }
}

/// `RouteNavigator` that records every navigation request in order.
#[derive(Default)]
pub struct RecordingNavigator {
    pub requests: RefCell<Vec<Route>>,
}

impl RouteNavigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.requests.borrow_mut().push(route);
    }
}

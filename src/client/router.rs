use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Dashboard, Home, MyBookings, NotFound, Rooms},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/rooms")]
    Rooms {},

    #[route("/dashboard")]
    Dashboard {},

    #[route("/my-bookings")]
    MyBookings {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

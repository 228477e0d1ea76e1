use crate::client::router::Route;

/// A labelled destination in the header.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub route: Route,
}

impl NavLink {
    fn new(name: &'static str, route: Route) -> Self {
        Self { name, route }
    }
}

/// Links shown to every visitor, in display order.
pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", Route::Home {}),
        NavLink::new("Hotels", Route::Rooms {}),
        NavLink::new("Experience", Route::Home {}),
        NavLink::new("About", Route::Home {}),
    ]
}

/// Extra link shown to signed-in users only.
pub fn dashboard_link() -> NavLink {
    NavLink::new("Dashboard", Route::Dashboard {})
}

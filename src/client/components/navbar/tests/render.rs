//! Renders the header under a fixed session status and checks the resulting markup.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::client::{
    identity::{AuthState, Identity},
    router::Route,
    test_util::{test_user, RecordingIdentity},
};

#[component]
fn HeaderHarness(auth: AuthState) -> Element {
    let state = use_signal(|| auth.clone());
    use_context_provider(move || Identity::new(state, Rc::new(RecordingIdentity::default())));

    rsx! { Router::<Route> {} }
}

/// Renders the home page with its header to an HTML string.
fn render(auth: AuthState) -> String {
    let mut dom = VirtualDom::new_with_props(
        HeaderHarness,
        HeaderHarnessProps::builder().auth(auth).build(),
    );
    dom.rebuild_in_place();

    dioxus_ssr::render(&dom)
}

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Tests the render gate on real output.
///
/// Verifies that no header markup exists while the session is loading, while the page
/// below the header still renders.
///
/// Expected: no nav element, no Login, page content present
#[test]
fn loading_renders_no_header() {
    let html = render(AuthState::loading());

    assert!(!html.contains("<nav"), "header rendered while loading: {html}");
    assert!(!html.contains("Login"));
    assert!(!html.contains("Open menu"));
    assert!(html.contains("Discover Your Perfect Getaway Destination"));
}

/// Tests the signed out header in both layouts.
///
/// Verifies that the desktop row and the mobile overlay each offer Login, that neither
/// shows Dashboard, and that the overlay starts closed.
///
/// Expected: 2 Login controls, 0 Dashboard links, overlay off-screen
#[test]
fn signed_out_renders_login_in_both_layouts() {
    let html = render(AuthState::signed_out());

    assert!(html.contains("<nav"));
    assert_eq!(count(&html, "Login"), 2, "{html}");
    assert_eq!(count(&html, "Dashboard"), 0, "{html}");
    assert_eq!(count(&html, "Open account menu"), 0);
    assert_eq!(count(&html, "Hotels"), 2);
    assert_eq!(count(&html, "translate-x-full"), 1);
}

/// Tests the signed in header in both layouts.
///
/// Verifies that Dashboard appears on the desktop row and in the overlay, the account
/// menu trigger is shown in both layouts, no Login control remains and the menu starts
/// collapsed.
///
/// Expected: 2 Dashboard links, 2 account menu triggers, no Login, no menu entries
#[test]
fn signed_in_renders_dashboard_and_account_menu() {
    let html = render(AuthState::signed_in(test_user()));

    assert_eq!(count(&html, "Dashboard"), 2, "{html}");
    assert_eq!(count(&html, "href=\"/dashboard\""), 2);
    assert_eq!(count(&html, "Open account menu"), 2);
    assert!(!html.contains("Login"), "{html}");
    assert!(!html.contains("My Bookings"));
}

/// Tests that the signed in user is still not shown before the session loads.
///
/// Expected: no nav element, no account menu
#[test]
fn user_before_load_renders_no_header() {
    let html = render(AuthState {
        loaded: false,
        user: Some(test_user()),
    });

    assert!(!html.contains("<nav"));
    assert!(!html.contains("Open account menu"));
}

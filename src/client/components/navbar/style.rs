//! Utility class selection for the header.
//!
//! The header only decides which Tailwind classes apply under which scroll and menu
//! state; the classes themselves come from the global stylesheet.

use crate::client::{components::navbar::MenuState, hooks::ScrollState};

const NAV_BASE: &str = "fixed top-0 left-0 w-full flex items-center justify-between px-4 md:px-16 lg:px-24 xl:px-32 transition-all duration-500 z-50";
const NAV_SCROLLED: &str = "bg-white/80 shadow-md text-gray-700 backdrop-blur-lg py-3 md:py-4";
const NAV_TOP: &str = "py-4 md:py-6 text-black bg-slate-500";

const LOGO_BASE: &str = "w-32 md:w-40 opacity-80";

const LOGIN_BASE: &str =
    "px-8 py-2.5 rounded-full ml-4 transition-all duration-500 cursor-pointer font-medium";

const OVERLAY_BASE: &str = "fixed top-0 left-0 w-full h-screen bg-white text-gray-800 flex flex-col md:hidden items-center justify-center gap-8 font-semibold transition-transform duration-500 z-60";

fn pick(scroll: ScrollState, scrolled: &'static str, top: &'static str) -> &'static str {
    if scroll.is_scrolled() {
        scrolled
    } else {
        top
    }
}

pub fn nav_class(scroll: ScrollState) -> String {
    format!("{NAV_BASE} {}", pick(scroll, NAV_SCROLLED, NAV_TOP))
}

/// The logo is whitened over the dark hero and shown in its own colors once scrolled.
pub fn logo_class(scroll: ScrollState) -> String {
    format!("{LOGO_BASE} {}", pick(scroll, "", "brightness-0 invert"))
        .trim_end()
        .to_string()
}

pub fn link_underline_class(scroll: ScrollState) -> String {
    format!(
        "{} h-0.5 w-0 group-hover:w-full transition-all duration-300",
        pick(scroll, "bg-gray-700", "bg-white")
    )
}

pub fn dashboard_pill_class(scroll: ScrollState) -> String {
    format!(
        "border px-4 py-1 text-sm font-light rounded-full transition-all {}",
        pick(scroll, "text-black border-black", "text-white border-white")
    )
}

pub fn login_button_class(scroll: ScrollState) -> String {
    format!(
        "{LOGIN_BASE} {}",
        pick(scroll, "text-white bg-black", "bg-white text-black")
    )
}

pub fn overlay_class(menu: MenuState) -> String {
    let position = if menu.is_open() {
        "translate-x-0"
    } else {
        "translate-x-full"
    };

    format!("{OVERLAY_BASE} {position}")
}

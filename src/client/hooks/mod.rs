pub mod scroll;

pub use scroll::{use_scroll_state, ScrollState};

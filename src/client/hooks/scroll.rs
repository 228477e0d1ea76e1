use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use self::subscription::ScrollSubscription;

/// Vertical offset in pixels past which the page counts as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Whether the window has been scrolled past `SCROLL_THRESHOLD_PX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState(bool);

impl ScrollState {
    /// Strictly greater than the threshold counts as scrolled.
    pub fn from_offset(offset: f64) -> Self {
        Self(offset > SCROLL_THRESHOLD_PX)
    }

    pub fn is_scrolled(self) -> bool {
        self.0
    }
}

/// Tracks the window scroll position for as long as the calling component is mounted.
///
/// Exactly one window listener is attached when the component mounts. It is removed when
/// the component unmounts so no callback outlives the signal it writes to.
pub fn use_scroll_state() -> Signal<ScrollState> {
    let mut scroll = use_signal(ScrollState::default);

    let subscription = use_hook(move || {
        Rc::new(RefCell::new(ScrollSubscription::attach(move |offset| {
            let next = ScrollState::from_offset(offset);
            if *scroll.peek() != next {
                scroll.set(next);
            }
        })))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    scroll
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod subscription {
    use dioxus_logger::tracing;
    use wasm_bindgen::{closure::Closure, JsCast};

    /// Window `scroll` listener, removed again when dropped.
    pub struct ScrollSubscription {
        window: web_sys::Window,
        callback: Closure<dyn FnMut()>,
    }

    impl ScrollSubscription {
        pub fn attach(mut on_offset: impl FnMut(f64) + 'static) -> Option<Self> {
            let Some(window) = web_sys::window() else {
                tracing::warn!("No browser window available, scroll tracking disabled");
                return None;
            };

            let reader = window.clone();
            let callback = Closure::<dyn FnMut()>::new(move || match reader.scroll_y() {
                Ok(offset) => on_offset(offset),
                Err(err) => tracing::warn!("Failed to read scroll offset: {:?}", err),
            });

            if let Err(err) = window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::error!("Failed to subscribe to window scroll: {:?}", err);
                return None;
            }

            Some(Self { window, callback })
        }
    }

    impl Drop for ScrollSubscription {
        fn drop(&mut self) {
            if let Err(err) = self.window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            ) {
                tracing::error!("Failed to unsubscribe from window scroll: {:?}", err);
            }
        }
    }
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
mod subscription {
    use dioxus_logger::tracing;

    pub struct ScrollSubscription;

    impl ScrollSubscription {
        pub fn attach(_on_offset: impl FnMut(f64) + 'static) -> Option<Self> {
            tracing::debug!("Scroll tracking is only available in the browser build");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollState, SCROLL_THRESHOLD_PX};

    /// Tests the threshold boundary.
    ///
    /// Verifies that an offset of exactly 10 is not scrolled and 11 is.
    ///
    /// Expected: false at 10, true at 11
    #[test]
    fn threshold_boundary_is_exclusive() {
        assert!(!ScrollState::from_offset(10.0).is_scrolled());
        assert!(ScrollState::from_offset(11.0).is_scrolled());
    }

    /// Tests offsets across the range.
    ///
    /// Expected: false for every offset <= 10, true for every offset > 10
    #[test]
    fn scrolled_only_past_threshold() {
        for offset in [-5.0, 0.0, 0.5, 9.99, SCROLL_THRESHOLD_PX] {
            assert!(
                !ScrollState::from_offset(offset).is_scrolled(),
                "{offset} should not count as scrolled"
            );
        }
        for offset in [10.01, 11.0, 250.0, 10_000.0] {
            assert!(
                ScrollState::from_offset(offset).is_scrolled(),
                "{offset} should count as scrolled"
            );
        }
    }

    #[test]
    fn defaults_to_not_scrolled() {
        assert!(!ScrollState::default().is_scrolled());
    }
}

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    config::IdentityConfig,
    identity::{AuthState, HostedIdentity, Identity},
};

/// Session status the provider starts from.
///
/// Only the browser build can reach the hosted provider, so it starts out loading. Every
/// other target reports signed out straight away and still renders the header.
pub fn initial_auth_state() -> AuthState {
    if cfg!(all(feature = "web", target_arch = "wasm32")) {
        AuthState::loading()
    } else {
        AuthState::signed_out()
    }
}

/// Provides the `Identity` context and loads the session status once on mount.
///
/// In the browser build, if the provider cannot be reached the state never leaves
/// "loading", which keeps auth-dependent UI such as the header hidden rather than guessing.
#[component]
pub fn IdentityProvider(children: Element) -> Element {
    let config = use_hook(|| match IdentityConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Identity configuration error: {}; using defaults", e);
            IdentityConfig::default()
        }
    });
    let state = use_signal(initial_auth_state);

    let session_url = config.session_url.clone();
    use_context_provider(move || Identity::new(state, Rc::new(HostedIdentity::new(config))));

    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    use_future(move || {
        let session_url = session_url.clone();
        let mut state = state;

        async move {
            use crate::client::identity::session::fetch_session;

            match fetch_session(&session_url).await {
                Ok(auth) => {
                    tracing::debug!("Session loaded, signed in: {}", auth.is_signed_in());
                    state.set(auth);
                }
                Err(err) => {
                    tracing::error!("{}", err);
                }
            }
        }
    });

    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    use_hook(move || {
        tracing::warn!(
            "Session status from {} is only loaded in the browser build, reporting signed out",
            session_url
        );
    });

    rsx! { {children} }
}

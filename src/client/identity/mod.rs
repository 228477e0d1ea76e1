//! Client-side adapter for the external identity provider.
//!
//! The provider owns sign-in, sign-out and session storage. This module only mirrors its
//! session status into a signal (`AuthState`) and exposes the provider's hosted flows
//! through the `IdentityClient` trait. Components reach both through `use_identity`.

pub mod client;
pub mod provider;
pub mod session;
pub mod state;


use std::rc::Rc;

use dioxus::prelude::*;

pub use client::{HostedIdentity, IdentityClient};
pub use provider::IdentityProvider;
pub use state::AuthState;

/// Context shared by `IdentityProvider` with everything rendered below it.
#[derive(Clone)]
pub struct Identity {
    state: Signal<AuthState>,
    client: Rc<dyn IdentityClient>,
}

impl Identity {
    pub fn new(state: Signal<AuthState>, client: Rc<dyn IdentityClient>) -> Self {
        Self { state, client }
    }

    /// Snapshot of the current session status. Reading subscribes the calling component.
    pub fn auth(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn client(&self) -> Rc<dyn IdentityClient> {
        self.client.clone()
    }
}

/// Returns the identity context provided by the nearest `IdentityProvider`.
pub fn use_identity() -> Identity {
    use_context::<Identity>()
}

use dioxus_logger::tracing;

use crate::client::config::IdentityConfig;

/// Entry points into the identity provider's hosted flows.
///
/// The header only ever asks the provider to start a flow; whatever happens afterwards
/// (credentials, sessions, redirects back) belongs to the provider.
pub trait IdentityClient {
    /// Starts the provider's sign-in flow.
    fn open_sign_in(&self);

    /// Starts the provider's sign-out flow.
    fn sign_out(&self);
}

/// `IdentityClient` that sends the browser to the provider's hosted pages.
#[derive(Debug, Clone)]
pub struct HostedIdentity {
    config: IdentityConfig,
}

impl HostedIdentity {
    pub fn new(config: IdentityConfig) -> Self {
        Self { config }
    }
}

impl IdentityClient for HostedIdentity {
    fn open_sign_in(&self) {
        tracing::debug!("Opening sign-in at {}", self.config.sign_in_url);
        redirect(&self.config.sign_in_url);
    }

    fn sign_out(&self) {
        let url = self.config.sign_out_redirect();
        tracing::debug!("Signing out via {}", url);
        redirect(&url);
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn redirect(url: &str) {
    let Some(window) = web_sys::window() else {
        tracing::error!("No browser window available to redirect to {}", url);
        return;
    };

    if let Err(err) = window.location().set_href(url) {
        tracing::error!("Failed to redirect to {}: {:?}", url, err);
    }
}

#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn redirect(url: &str) {
    tracing::warn!(
        "Hosted identity pages are only reachable from the browser build, ignoring redirect to {}",
        url
    );
}

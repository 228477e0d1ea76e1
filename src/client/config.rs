//! Identity provider endpoints used by the web client.
//!
//! Values are baked in at compile time so the same bundle can be pointed at a different
//! provider by rebuilding with the `QUICKSTAY_*` variables set.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::client::error::ConfigError;

pub const DEFAULT_SESSION_URL: &str = "/api/auth/user";
pub const DEFAULT_SIGN_IN_URL: &str = "/api/auth/login";
pub const DEFAULT_SIGN_OUT_URL: &str = "/api/auth/logout";
pub const DEFAULT_AFTER_SIGN_OUT_URL: &str = "/";

#[derive(Debug, Clone, PartialEq)]
pub struct IdentityConfig {
    /// Endpoint returning the signed-in user, or 401/404 when signed out.
    pub session_url: String,
    /// Hosted sign-in flow the browser is sent to.
    pub sign_in_url: String,
    /// Hosted sign-out flow the browser is sent to.
    pub sign_out_url: String,
    /// Where the provider should send the browser once signed out.
    pub after_sign_out_url: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            session_url: DEFAULT_SESSION_URL.to_string(),
            sign_in_url: DEFAULT_SIGN_IN_URL.to_string(),
            sign_out_url: DEFAULT_SIGN_OUT_URL.to_string(),
            after_sign_out_url: DEFAULT_AFTER_SIGN_OUT_URL.to_string(),
        }
    }
}

impl IdentityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            session_url: option_env!("QUICKSTAY_SESSION_URL")
                .unwrap_or(DEFAULT_SESSION_URL)
                .to_string(),
            sign_in_url: option_env!("QUICKSTAY_SIGN_IN_URL")
                .unwrap_or(DEFAULT_SIGN_IN_URL)
                .to_string(),
            sign_out_url: option_env!("QUICKSTAY_SIGN_OUT_URL")
                .unwrap_or(DEFAULT_SIGN_OUT_URL)
                .to_string(),
            after_sign_out_url: option_env!("QUICKSTAY_AFTER_SIGN_OUT_URL")
                .unwrap_or(DEFAULT_AFTER_SIGN_OUT_URL)
                .to_string(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Checks every endpoint is either an absolute path or an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let urls = [
            ("QUICKSTAY_SESSION_URL", &self.session_url),
            ("QUICKSTAY_SIGN_IN_URL", &self.sign_in_url),
            ("QUICKSTAY_SIGN_OUT_URL", &self.sign_out_url),
            ("QUICKSTAY_AFTER_SIGN_OUT_URL", &self.after_sign_out_url),
        ];

        for (var, value) in urls {
            if !is_valid_url(value) {
                return Err(ConfigError::InvalidUrl {
                    var,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }

    /// Sign-out URL carrying the post sign-out destination as a percent-encoded `redirect`
    /// query parameter.
    pub fn sign_out_redirect(&self) -> String {
        let separator = if self.sign_out_url.contains('?') {
            '&'
        } else {
            '?'
        };

        format!(
            "{}{}redirect={}",
            self.sign_out_url,
            separator,
            utf8_percent_encode(&self.after_sign_out_url, NON_ALPHANUMERIC)
        )
    }
}

fn is_valid_url(value: &str) -> bool {
    let is_path = value.starts_with('/') && !value.starts_with("//");
    let is_http = ["http://", "https://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme));

    is_path || is_http
}

#[cfg(test)]
mod tests {
    use crate::client::{config::IdentityConfig, error::ConfigError};

    #[test]
    fn test_default_config() {
        let config = IdentityConfig::default();

        assert_eq!(config.session_url, "/api/auth/user");
        assert_eq!(config.sign_in_url, "/api/auth/login");
        assert_eq!(config.sign_out_url, "/api/auth/logout");
        assert_eq!(config.after_sign_out_url, "/");
        assert!(config.validate().is_ok(), "Defaults should validate");
    }

    #[test]
    fn test_accepts_absolute_http_urls() {
        let config = IdentityConfig {
            sign_in_url: "https://accounts.example.com/sign-in".to_string(),
            ..IdentityConfig::default()
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_relative_and_protocol_relative_urls() {
        for value in ["api/auth/login", "//evil.example.com", "", "https://"] {
            let config = IdentityConfig {
                sign_in_url: value.to_string(),
                ..IdentityConfig::default()
            };

            assert_eq!(
                config.validate(),
                Err(ConfigError::InvalidUrl {
                    var: "QUICKSTAY_SIGN_IN_URL",
                    value: value.to_string(),
                }),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_sign_out_redirect_appends_query() {
        let config = IdentityConfig::default();
        assert_eq!(config.sign_out_redirect(), "/api/auth/logout?redirect=%2F");

        let config = IdentityConfig {
            sign_out_url: "/api/auth/logout?all=true".to_string(),
            ..IdentityConfig::default()
        };
        assert_eq!(
            config.sign_out_redirect(),
            "/api/auth/logout?all=true&redirect=%2F"
        );
    }

    #[test]
    fn test_sign_out_redirect_keeps_destination_query_in_one_parameter() {
        let destination = "https://quickstay.example/?ref=logout&lang=en";
        let config = IdentityConfig {
            after_sign_out_url: destination.to_string(),
            ..IdentityConfig::default()
        };

        let url = config.sign_out_redirect();
        let (path, query) = url.split_once('?').expect("query string");
        let pairs: Vec<&str> = query.split('&').collect();

        assert_eq!(path, "/api/auth/logout");
        assert_eq!(pairs.len(), 1, "destination leaked into outer query: {url}");

        let encoded = pairs[0]
            .strip_prefix("redirect=")
            .expect("redirect parameter");
        let decoded = percent_encoding::percent_decode_str(encoded)
            .decode_utf8()
            .expect("valid utf-8");
        assert_eq!(decoded, destination);
    }

    #[test]
    fn test_from_env_without_overrides_matches_default() {
        // The test build does not set any QUICKSTAY_* variables.
        if option_env!("QUICKSTAY_SESSION_URL").is_none()
            && option_env!("QUICKSTAY_SIGN_IN_URL").is_none()
            && option_env!("QUICKSTAY_SIGN_OUT_URL").is_none()
            && option_env!("QUICKSTAY_AFTER_SIGN_OUT_URL").is_none()
        {
            assert_eq!(IdentityConfig::from_env(), Ok(IdentityConfig::default()));
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid URL for {var}: {value:?} (expected an absolute path or an http(s) URL)")]
    InvalidUrl { var: &'static str, value: String },
}

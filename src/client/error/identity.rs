use thiserror::Error;

/// Failures while asking the identity provider for the current session.
#[derive(Error, Debug, PartialEq)]
pub enum IdentityError {
    /// The request could not be sent or its body could not be read.
    #[error("Failed to request session status: {0}")]
    Request(String),
    /// The provider answered with a status that says nothing about the session.
    #[error("Session request failed with status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },
    /// The provider reported a session but the user payload did not match `UserDto`.
    #[error("Failed to parse session user: {0}")]
    Decode(String),
}

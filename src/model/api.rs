use serde::{Deserialize, Serialize};

/// The response body when a request to the identity provider fails
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

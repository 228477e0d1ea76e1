use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider's session endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

impl UserDto {
    /// Single uppercase letter shown in the account avatar when no image is available
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

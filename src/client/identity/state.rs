use crate::model::user::UserDto;

/// Session status as last reported by the identity provider.
///
/// The header treats this as read-only; only the identity provider component writes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Whether the provider has answered at least once.
    pub loaded: bool,
    /// The signed-in user, `None` while loading or when signed out.
    pub user: Option<UserDto>,
}

impl AuthState {
    /// Initial state before the provider has reported anything.
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn signed_out() -> Self {
        Self {
            loaded: true,
            user: None,
        }
    }

    pub fn signed_in(user: UserDto) -> Self {
        Self {
            loaded: true,
            user: Some(user),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// A user is only ever considered signed in once the state is loaded.
    pub fn is_signed_in(&self) -> bool {
        self.loaded && self.user.is_some()
    }
}

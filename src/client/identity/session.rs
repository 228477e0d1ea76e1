use crate::{
    client::{error::IdentityError, identity::AuthState},
    model::{api::ErrorDto, user::UserDto},
};

/// Interprets a response from the session status endpoint.
///
/// # Arguments
/// - `status` - HTTP status code of the response
/// - `body` - Raw response body
///
/// # Returns
/// - `Ok(AuthState)` - Loaded state, signed in on 200 and signed out on 401 or 404
/// - `Err(IdentityError)` - Any other status, or a 200 whose body is not a `UserDto`
pub fn session_from_response(status: u16, body: &str) -> Result<AuthState, IdentityError> {
    match status {
        200 => {
            let user = serde_json::from_str::<UserDto>(body)
                .map_err(|e| IdentityError::Decode(e.to_string()))?;

            Ok(AuthState::signed_in(user))
        }
        401 | 404 => Ok(AuthState::signed_out()),
        _ => {
            let message = match serde_json::from_str::<ErrorDto>(body) {
                Ok(error_dto) => error_dto.error,
                Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
                Err(_) => body.trim().to_string(),
            };

            Err(IdentityError::UnexpectedStatus { status, message })
        }
    }
}

/// Retrieve the current session from the identity provider
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub async fn fetch_session(session_url: &str) -> Result<AuthState, IdentityError> {
    use reqwasm::http::{Request, RequestCredentials};

    let response = Request::get(session_url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| IdentityError::Request(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| IdentityError::Request(e.to_string()))?;

    session_from_response(status, &body)
}

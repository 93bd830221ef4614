//! Error taxonomy surfaced to pages.
//!
//! Expired tokens and first-attempt 401s never show up here; the client
//! recovers from them. What remains is either an authentication failure the
//! client could not recover from (the session has already been cleared) or an
//! ordinary request failure that leaves the session alone.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered 401 and there was no refresh token to recover with.
    #[error("You are not signed in")]
    Unauthenticated,

    /// The access token expired locally and no refresh token is stored.
    #[error("Your session has expired, please sign in again")]
    NoRefreshToken,

    /// The refresh endpoint rejected the refresh token or could not be reached.
    #[error("Could not renew your session: {0}")]
    RefreshFailed(String),

    /// The backend kept answering 401 after a successful refresh.
    #[error("The server rejected your credentials")]
    AuthRejected,

    /// Any other non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// A form failed client-side validation; nothing was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// `true` for failures that cleared the session and will send the user to login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated
                | ApiError::NoRefreshToken
                | ApiError::RefreshFailed(_)
                | ApiError::AuthRejected
        )
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthenticated | ApiError::AuthRejected => Some(401),
            _ => None,
        }
    }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login failed: unknown username or wrong password.
    ///
    /// The two cases are deliberately indistinguishable to the client.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No user id stored in the session cookie.
    ///
    /// The caller is not logged in or their session expired. Results in a
    /// 401 Unauthorized response.
    #[error("No user found in session")]
    UserNotInSession,

    /// Session carries a user id that no longer exists in the database.
    ///
    /// Can happen when an account is deleted while a session is live.
    /// Results in a 401 Unauthorized response.
    #[error("User '{0}' from session not found in database")]
    UserNotInDatabase(String),

    /// Authenticated user lacks the role required for the operation, or is
    /// acting on a resource they do not own.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User '{user_id}' denied access: {action}")]
    AccessDenied {
        /// The user attempting the operation
        user_id: String,
        /// What was attempted, for server-side logs
        action: String,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` / `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Denials are logged at debug level with full context; client-facing messages
/// stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("Rejected unauthenticated request: {}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not logged in".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied { ref user_id, ref action } => {
                tracing::debug!("Access denied for user '{}': {}", user_id, action);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

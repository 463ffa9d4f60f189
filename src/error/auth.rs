use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::DetailDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization: Token <key>` header was supplied on an endpoint that
    /// requires authentication.
    #[error("Authentication credentials were not provided.")]
    MissingCredentials,

    /// The supplied token key does not match any issued token.
    #[error("Invalid token.")]
    InvalidToken,

    /// The authenticated user is not allowed to perform this action (e.g. a
    /// write against a drone owned by another user).
    #[error("You do not have permission to perform this action.")]
    PermissionDenied,
}

/// Converts authentication errors into HTTP responses.
///
/// Credential problems map to 401 Unauthorized with a `WWW-Authenticate`
/// challenge advertising the token scheme; permission problems on an
/// authenticated request map to 403 Forbidden. Both carry a `{"detail": ...}`
/// body with the error's display message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let detail = DetailDto {
            detail: self.to_string(),
        };

        match self {
            Self::MissingCredentials | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Token")],
                Json(detail),
            )
                .into_response(),
            Self::PermissionDenied => (StatusCode::FORBIDDEN, Json(detail)).into_response(),
        }
    }
}

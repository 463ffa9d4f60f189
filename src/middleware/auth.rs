use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

/// Guard for endpoints that require token authentication.
///
/// Credentials arrive as `Authorization: Token <key>`. The key is resolved to
/// a user through the token table; anything else is a 401.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Requires a valid API token, returning the authenticated user.
    pub async fn require_token(&self) -> Result<entity::user::Model, AppError> {
        let Some(value) = self.headers.get(header::AUTHORIZATION) else {
            return Err(AuthError::MissingCredentials.into());
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::MissingCredentials)?;

        let Some(key) = value.strip_prefix("Token ") else {
            return Err(AuthError::MissingCredentials.into());
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let Some(user) = UserRepository::new(self.db).find_by_token(key).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        Ok(user)
    }
}

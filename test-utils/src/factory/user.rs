//! User and API token factories for authentication tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an API token for the given user.
///
/// The token key is a deterministic 40-character hex string derived from the
/// test counter, matching the shape of keys minted by the server bootstrap.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - User the token authenticates
///
/// # Returns
/// - `Ok(entity::api_token::Model)` - Created token entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_token_for_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::api_token::Model, DbErr> {
    let key = format!("{:0>40x}", next_id());

    entity::api_token::ActiveModel {
        key: ActiveValue::Set(key),
        user_id: ActiveValue::Set(user_id),
        created: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

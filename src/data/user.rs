use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user by username, creating them on first sight
    pub async fn find_or_create(&self, username: &str) -> Result<entity::user::Model, DbErr> {
        let existing = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        if let Some(user) = existing {
            return Ok(user);
        }

        entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Resolves an API token key to the user it belongs to
    pub async fn find_by_token(&self, key: &str) -> Result<Option<entity::user::Model>, DbErr> {
        let result = entity::prelude::ApiToken::find_by_id(key.to_string())
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(_, user)| user))
    }

    /// Stores a freshly minted API token key for a user
    pub async fn insert_token(
        &self,
        user_id: i32,
        key: String,
    ) -> Result<entity::api_token::Model, DbErr> {
        entity::api_token::ActiveModel {
            key: ActiveValue::Set(key),
            user_id: ActiveValue::Set(user_id),
            created: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

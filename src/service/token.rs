use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::AppError};

pub struct TokenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Mints a fresh API token for a user and stores it. The key is 40 hex
    /// characters, matching the credential format clients already use.
    pub async fn mint(&self, user_id: i32) -> Result<entity::api_token::Model, AppError> {
        let mut bytes = [0u8; 20];
        rand::rng().fill(&mut bytes);

        let key: String = bytes.iter().map(|byte| format!("{:02x}", byte)).collect();

        Ok(UserRepository::new(self.db)
            .insert_token(user_id, key)
            .await?)
    }
}

#[cfg(test)]
mod test {
    use sea_orm::DbErr;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    #[tokio::test]
    async fn mints_a_forty_character_hex_key() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;

        let token = TokenService::new(db).mint(user.id).await.unwrap();

        assert_eq!(token.key.len(), 40);
        assert!(token.key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(token.user_id, user.id);
        Ok(())
    }
}

use sea_orm::DatabaseConnection;

use crate::{data::toy::ToyRepository, error::AppError, model::toy::ToyWriteParams};

pub struct ToyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every toy, ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::toy::Model>, AppError> {
        Ok(ToyRepository::new(self.db).get_all().await?)
    }

    /// Gets a toy by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::toy::Model>, AppError> {
        Ok(ToyRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a new toy
    pub async fn create(&self, params: ToyWriteParams) -> Result<entity::toy::Model, AppError> {
        Ok(ToyRepository::new(self.db).create(params).await?)
    }

    /// Replaces every user-settable field of an existing toy
    pub async fn overwrite(
        &self,
        toy: entity::toy::Model,
        params: ToyWriteParams,
    ) -> Result<entity::toy::Model, AppError> {
        Ok(ToyRepository::new(self.db).update(toy, params).await?)
    }

    /// Deletes a toy, reporting whether it existed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ToyRepository::new(self.db).delete(id).await?)
    }
}

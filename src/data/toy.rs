use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::model::toy::ToyWriteParams;

pub struct ToyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every toy, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::toy::Model>, DbErr> {
        entity::prelude::Toy::find()
            .order_by_asc(entity::toy::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets a toy by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::toy::Model>, DbErr> {
        entity::prelude::Toy::find_by_id(id).one(self.db).await
    }

    /// Creates a new toy, stamping the creation time server-side
    pub async fn create(&self, params: ToyWriteParams) -> Result<entity::toy::Model, DbErr> {
        entity::toy::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            release_date: ActiveValue::Set(params.release_date),
            toy_category: ActiveValue::Set(params.toy_category),
            was_included_in_home: ActiveValue::Set(params.was_included_in_home),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces every user-settable field of an existing toy. The creation
    /// timestamp is preserved.
    pub async fn update(
        &self,
        toy: entity::toy::Model,
        params: ToyWriteParams,
    ) -> Result<entity::toy::Model, DbErr> {
        let mut active_model: entity::toy::ActiveModel = toy.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.release_date = ActiveValue::Set(params.release_date);
        active_model.toy_category = ActiveValue::Set(params.toy_category);
        active_model.was_included_in_home = ActiveValue::Set(params.was_included_in_home);

        active_model.update(self.db).await
    }

    /// Deletes a toy, reporting whether a row was actually removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Toy::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

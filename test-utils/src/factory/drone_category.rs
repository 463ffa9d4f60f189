//! Drone category factory for creating test category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drone categories with customizable fields.
pub struct DroneCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> DroneCategoryFactory<'a> {
    /// Creates a new DroneCategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Category {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Category {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the drone category entity into the database.
    pub async fn build(self) -> Result<entity::drone_category::Model, DbErr> {
        entity::drone_category::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drone category with default values.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::drone_category::Model, DbErr> {
    DroneCategoryFactory::new(db).build().await
}

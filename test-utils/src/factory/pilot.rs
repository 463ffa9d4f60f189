//! Pilot factory for creating test pilot entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pilots with customizable fields.
pub struct PilotFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    gender: String,
    races_count: i32,
}

impl<'a> PilotFactory<'a> {
    /// Creates a new PilotFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pilot {id}"` where id is auto-incremented
    /// - gender: `"M"`
    /// - races_count: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Pilot {}", id),
            gender: "M".to_string(),
            races_count: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn races_count(mut self, races_count: i32) -> Self {
        self.races_count = races_count;
        self
    }

    /// Builds and inserts the pilot entity into the database.
    pub async fn build(self) -> Result<entity::pilot::Model, DbErr> {
        entity::pilot::ActiveModel {
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set(self.gender),
            races_count: ActiveValue::Set(self.races_count),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pilot with default values.
pub async fn create_pilot(db: &DatabaseConnection) -> Result<entity::pilot::Model, DbErr> {
    PilotFactory::new(db).build().await
}

//! Toy factory for creating test toy entities.
//!
//! This module provides factory methods for creating toy entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test toys with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::toy::ToyFactory;
///
/// let toy = ToyFactory::new(&db)
///     .name("Hawaiian Barbie")
///     .toy_category("Dolls")
///     .build()
///     .await?;
/// ```
pub struct ToyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    release_date: DateTime<Utc>,
    toy_category: String,
    was_included_in_home: bool,
}

impl<'a> ToyFactory<'a> {
    /// Creates a new ToyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Toy {id}"` where id is auto-incremented
    /// - description: `"Description {id}"`
    /// - release_date: `2020-01-01T00:00:00Z`
    /// - toy_category: `"Action figures"`
    /// - was_included_in_home: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Toy {}", id),
            description: format!("Description {}", id),
            release_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            toy_category: "Action figures".to_string(),
            was_included_in_home: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn toy_category(mut self, toy_category: impl Into<String>) -> Self {
        self.toy_category = toy_category.into();
        self
    }

    pub fn was_included_in_home(mut self, was_included_in_home: bool) -> Self {
        self.was_included_in_home = was_included_in_home;
        self
    }

    /// Builds and inserts the toy entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::toy::Model)` - Created toy entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::toy::Model, DbErr> {
        entity::toy::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            release_date: ActiveValue::Set(self.release_date),
            toy_category: ActiveValue::Set(self.toy_category),
            was_included_in_home: ActiveValue::Set(self.was_included_in_home),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a toy with default values.
///
/// Shorthand for `ToyFactory::new(db).build().await`.
pub async fn create_toy(db: &DatabaseConnection) -> Result<entity::toy::Model, DbErr> {
    ToyFactory::new(db).build().await
}

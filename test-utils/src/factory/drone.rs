//! Drone factory for creating test drone entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drones with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::drone::DroneFactory;
///
/// let drone = DroneFactory::new(&db, category.id)
///     .name("WonderDrone")
///     .owner_id(Some(user.id))
///     .build()
///     .await?;
/// ```
pub struct DroneFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    drone_category_id: i32,
    manufacturing_date: DateTime<Utc>,
    has_it_competed: bool,
    owner_id: Option<i32>,
}

impl<'a> DroneFactory<'a> {
    /// Creates a new DroneFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Drone {id}"` where id is auto-incremented
    /// - manufacturing_date: `2017-07-20T02:02:00Z`
    /// - has_it_competed: `false`
    /// - owner_id: `None`
    pub fn new(db: &'a DatabaseConnection, drone_category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Drone {}", id),
            drone_category_id,
            manufacturing_date: Utc.with_ymd_and_hms(2017, 7, 20, 2, 2, 0).unwrap(),
            has_it_competed: false,
            owner_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn manufacturing_date(mut self, manufacturing_date: DateTime<Utc>) -> Self {
        self.manufacturing_date = manufacturing_date;
        self
    }

    pub fn has_it_competed(mut self, has_it_competed: bool) -> Self {
        self.has_it_competed = has_it_competed;
        self
    }

    pub fn owner_id(mut self, owner_id: Option<i32>) -> Self {
        self.owner_id = owner_id;
        self
    }

    /// Builds and inserts the drone entity into the database.
    pub async fn build(self) -> Result<entity::drone::Model, DbErr> {
        entity::drone::ActiveModel {
            name: ActiveValue::Set(self.name),
            drone_category_id: ActiveValue::Set(self.drone_category_id),
            manufacturing_date: ActiveValue::Set(self.manufacturing_date),
            has_it_competed: ActiveValue::Set(self.has_it_competed),
            inserted_timestamp: ActiveValue::Set(Utc::now()),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drone in the given category with default values.
pub async fn create_drone(
    db: &DatabaseConnection,
    drone_category_id: i32,
) -> Result<entity::drone::Model, DbErr> {
    DroneFactory::new(db, drone_category_id).build().await
}

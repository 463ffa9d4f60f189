//! Competition factory for creating test competition entities.

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test competitions with customizable fields.
pub struct CompetitionFactory<'a> {
    db: &'a DatabaseConnection,
    pilot_id: i32,
    drone_id: i32,
    distance_in_feet: i32,
    distance_achievement_date: DateTime<Utc>,
}

impl<'a> CompetitionFactory<'a> {
    /// Creates a new CompetitionFactory with default values.
    ///
    /// Defaults:
    /// - distance_in_feet: `800`
    /// - distance_achievement_date: `2017-10-20T05:03:20Z`
    pub fn new(db: &'a DatabaseConnection, pilot_id: i32, drone_id: i32) -> Self {
        Self {
            db,
            pilot_id,
            drone_id,
            distance_in_feet: 800,
            distance_achievement_date: Utc.with_ymd_and_hms(2017, 10, 20, 5, 3, 20).unwrap(),
        }
    }

    pub fn distance_in_feet(mut self, distance_in_feet: i32) -> Self {
        self.distance_in_feet = distance_in_feet;
        self
    }

    pub fn distance_achievement_date(mut self, date: DateTime<Utc>) -> Self {
        self.distance_achievement_date = date;
        self
    }

    /// Builds and inserts the competition entity into the database.
    pub async fn build(self) -> Result<entity::competition::Model, DbErr> {
        entity::competition::ActiveModel {
            pilot_id: ActiveValue::Set(self.pilot_id),
            drone_id: ActiveValue::Set(self.drone_id),
            distance_in_feet: ActiveValue::Set(self.distance_in_feet),
            distance_achievement_date: ActiveValue::Set(self.distance_achievement_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a competition between the given pilot and drone with default values.
pub async fn create_competition(
    db: &DatabaseConnection,
    pilot_id: i32,
    drone_id: i32,
) -> Result<entity::competition::Model, DbErr> {
    CompetitionFactory::new(db, pilot_id, drone_id).build().await
}

use chrono::{DateTime, Utc};

/// A competition together with the names of its pilot and drone, which the
/// wire representation uses in place of the foreign keys.
#[derive(Debug, Clone)]
pub struct CompetitionWithNames {
    pub competition: entity::competition::Model,
    pub pilot_name: String,
    pub drone_name: String,
}

/// Validated user-settable fields of a competition.
///
/// `pilot` and `drone` carry *names*; the service resolves each to a row and
/// rejects unknown names as validation errors.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitionWriteParams {
    pub pilot: String,
    pub drone: String,
    pub distance_in_feet: i32,
    pub distance_achievement_date: DateTime<Utc>,
}

/// Filters applied to the competition list, including range filters on
/// distance and achievement date.
#[derive(Debug, Clone, Default)]
pub struct CompetitionListFilter {
    pub distance_in_feet: Option<i32>,
    pub min_distance_in_feet: Option<i32>,
    pub max_distance_in_feet: Option<i32>,
    pub from_achievement_date: Option<DateTime<Utc>>,
    pub to_achievement_date: Option<DateTime<Utc>>,
    pub drone_name: Option<String>,
    pub pilot_name: Option<String>,
    pub ordering: Option<String>,
}

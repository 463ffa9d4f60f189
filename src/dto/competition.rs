use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::{
    dto::field,
    error::validation::FieldErrors,
    model::competition::{CompetitionWithNames, CompetitionWriteParams},
    util::datetime,
};

/// Wire representation of a competition. Pilot and drone appear by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompetitionDto {
    pub id: i32,
    pub distance_in_feet: i32,
    #[serde(with = "datetime::iso8601")]
    pub distance_achievement_date: DateTime<Utc>,
    pub pilot: String,
    pub drone: String,
}

impl From<CompetitionWithNames> for CompetitionDto {
    fn from(competition: CompetitionWithNames) -> Self {
        Self {
            id: competition.competition.id,
            distance_in_feet: competition.competition.distance_in_feet,
            distance_achievement_date: competition.competition.distance_achievement_date,
            pilot: competition.pilot_name,
            drone: competition.drone_name,
        }
    }
}

/// Query parameters accepted by the competition list endpoint, including the
/// range filters on distance and achievement date.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CompetitionListQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub distance_in_feet: Option<i32>,
    pub min_distance_in_feet: Option<i32>,
    pub max_distance_in_feet: Option<i32>,
    pub from_achievement_date: Option<DateTime<Utc>>,
    pub to_achievement_date: Option<DateTime<Utc>>,
    /// Exact drone name filter.
    pub drone_name: Option<String>,
    /// Exact pilot name filter.
    pub pilot_name: Option<String>,
    /// Ordering field, prefixed with `-` for descending.
    pub ordering: Option<String>,
}

/// Decodes a competition write body. Pilot and drone are referenced by name;
/// the service resolves them to rows.
pub fn decode(body: &Value) -> Result<CompetitionWriteParams, FieldErrors> {
    let mut errors = FieldErrors::new();

    let pilot = field::required_string(body, "pilot", 150, &mut errors);
    let drone = field::required_string(body, "drone", 250, &mut errors);
    let distance_in_feet = field::required_i32(body, "distance_in_feet", &mut errors);
    let distance_achievement_date =
        field::required_datetime(body, "distance_achievement_date", &mut errors);

    match (pilot, drone, distance_in_feet, distance_achievement_date) {
        (Some(pilot), Some(drone), Some(distance_in_feet), Some(distance_achievement_date))
            if errors.is_empty() =>
        {
            Ok(CompetitionWriteParams {
                pilot,
                drone,
                distance_in_feet,
                distance_achievement_date,
            })
        }
        _ => Err(errors),
    }
}

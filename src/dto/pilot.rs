use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::{
    dto::{drone::DroneDto, field},
    error::validation::FieldErrors,
    model::pilot::{Gender, PilotWithCompetitions, PilotWriteParams},
    util::datetime,
};

/// A competition as nested under its pilot: full drone detail, no pilot
/// back-reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PilotCompetitionDto {
    pub id: i32,
    pub distance_in_feet: i32,
    #[serde(with = "datetime::iso8601")]
    pub distance_achievement_date: DateTime<Utc>,
    pub drone: DroneDto,
}

/// Wire representation of a pilot, with the competitions they flew nested by
/// descending distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PilotDto {
    pub id: i32,
    pub name: String,
    pub gender: String,
    pub gender_description: String,
    pub races_count: i32,
    #[serde(with = "datetime::iso8601")]
    pub inserted_timestamp: DateTime<Utc>,
    pub competitions: Vec<PilotCompetitionDto>,
}

impl From<PilotWithCompetitions> for PilotDto {
    fn from(pilot: PilotWithCompetitions) -> Self {
        let gender_description = Gender::from_code(&pilot.pilot.gender)
            .map(|gender| gender.description().to_string())
            .unwrap_or_else(|| pilot.pilot.gender.clone());

        Self {
            id: pilot.pilot.id,
            name: pilot.pilot.name,
            gender: pilot.pilot.gender,
            gender_description,
            races_count: pilot.pilot.races_count,
            inserted_timestamp: pilot.pilot.inserted_timestamp,
            competitions: pilot
                .competitions
                .into_iter()
                .map(|entry| PilotCompetitionDto {
                    id: entry.competition.id,
                    distance_in_feet: entry.competition.distance_in_feet,
                    distance_achievement_date: entry.competition.distance_achievement_date,
                    drone: DroneDto::from(entry.drone),
                })
                .collect(),
        }
    }
}

/// Query parameters accepted by the pilot list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PilotListQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    /// Exact name filter.
    pub name: Option<String>,
    /// Exact gender code filter (`M` or `F`).
    pub gender: Option<String>,
    pub races_count: Option<i32>,
    /// Name prefix search.
    pub search: Option<String>,
    /// Ordering field, prefixed with `-` for descending.
    pub ordering: Option<String>,
}

/// Decodes a pilot write body. Gender defaults to male when omitted.
pub fn decode(body: &Value) -> Result<PilotWriteParams, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = field::required_string(body, "name", 150, &mut errors);
    let races_count = field::required_i32(body, "races_count", &mut errors);
    let gender = decode_gender(body, &mut errors);

    match (name, races_count, gender) {
        (Some(name), Some(races_count), Some(gender)) if errors.is_empty() => Ok(PilotWriteParams {
            name,
            gender,
            races_count,
        }),
        _ => Err(errors),
    }
}

fn decode_gender(body: &Value, errors: &mut FieldErrors) -> Option<Gender> {
    match body.get("gender") {
        None | Some(Value::Null) => Some(Gender::Male),
        Some(Value::String(code)) => match Gender::from_code(code) {
            Some(gender) => Some(gender),
            None => {
                errors.push("gender", format!("\"{}\" is not a valid choice.", code));
                None
            }
        },
        Some(other) => {
            errors.push("gender", format!("\"{}\" is not a valid choice.", other));
            None
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_a_complete_body() {
        let body = json!({
            "name": "Penelope Pitstop",
            "gender": "F",
            "races_count": 0,
        });

        let params = decode(&body).unwrap();

        assert_eq!(params.name, "Penelope Pitstop");
        assert_eq!(params.gender, Gender::Female);
        assert_eq!(params.races_count, 0);
    }

    #[test]
    fn gender_defaults_to_male() {
        let body = json!({"name": "Peter Perfect", "races_count": 2});

        let params = decode(&body).unwrap();

        assert_eq!(params.gender, Gender::Male);
    }

    #[test]
    fn unknown_gender_code_is_rejected() {
        let body = json!({"name": "Peter Perfect", "gender": "X", "races_count": 2});

        let errors = decode(&body).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors.contains("gender"));
    }

    #[test]
    fn races_count_must_be_an_integer() {
        let body = json!({"name": "Peter Perfect", "races_count": "many"});

        let errors = decode(&body).unwrap_err();

        assert!(errors.contains("races_count"));
    }
}

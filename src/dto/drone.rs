use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::{
    dto::field,
    error::validation::FieldErrors,
    model::drone::{DroneWithCategory, DroneWriteParams},
    util::datetime,
};

/// Wire representation of a drone. The category appears by name rather than
/// by foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DroneDto {
    pub id: i32,
    pub name: String,
    pub drone_category: String,
    #[serde(with = "datetime::iso8601")]
    pub manufacturing_date: DateTime<Utc>,
    pub has_it_competed: bool,
    #[serde(with = "datetime::iso8601")]
    pub inserted_timestamp: DateTime<Utc>,
}

impl From<DroneWithCategory> for DroneDto {
    fn from(drone: DroneWithCategory) -> Self {
        Self {
            id: drone.drone.id,
            name: drone.drone.name,
            drone_category: drone.category_name,
            manufacturing_date: drone.drone.manufacturing_date,
            has_it_competed: drone.drone.has_it_competed,
            inserted_timestamp: drone.drone.inserted_timestamp,
        }
    }
}

/// Query parameters accepted by the drone list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DroneListQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    /// Exact name filter.
    pub name: Option<String>,
    /// Exact category name filter.
    pub drone_category: Option<String>,
    pub has_it_competed: Option<bool>,
    /// Name prefix search.
    pub search: Option<String>,
    /// Ordering field, prefixed with `-` for descending.
    pub ordering: Option<String>,
}

/// Decodes a drone write body. The category is referenced by name; resolving
/// it to a row is the service's job.
pub fn decode(body: &Value) -> Result<DroneWriteParams, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = field::required_string(body, "name", 250, &mut errors);
    let drone_category = field::required_string(body, "drone_category", 250, &mut errors);
    let manufacturing_date = field::required_datetime(body, "manufacturing_date", &mut errors);
    let has_it_competed = field::optional_bool(body, "has_it_competed", false, &mut errors);

    match (name, drone_category, manufacturing_date) {
        (Some(name), Some(drone_category), Some(manufacturing_date)) if errors.is_empty() => {
            Ok(DroneWriteParams {
                name,
                drone_category,
                manufacturing_date,
                has_it_competed,
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_a_complete_body() {
        let body = json!({
            "name": "Python Drone",
            "drone_category": "Quadcopter",
            "manufacturing_date": "2017-07-16T02:03:00.716312Z",
            "has_it_competed": false,
        });

        let params = decode(&body).unwrap();

        assert_eq!(params.name, "Python Drone");
        assert_eq!(params.drone_category, "Quadcopter");
        assert!(!params.has_it_competed);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let errors = decode(&json!({"name": "WonderDrone"})).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.contains("drone_category"));
        assert!(errors.contains("manufacturing_date"));
    }
}

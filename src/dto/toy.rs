use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    dto::field,
    error::validation::FieldErrors,
    model::toy::ToyWriteParams,
    util::datetime,
};

/// Wire representation of a toy. The internal `created` timestamp is not
/// exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ToyDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[serde(with = "datetime::iso8601")]
    pub release_date: DateTime<Utc>,
    pub toy_category: String,
    pub was_included_in_home: bool,
}

impl From<entity::toy::Model> for ToyDto {
    fn from(toy: entity::toy::Model) -> Self {
        Self {
            id: toy.id,
            name: toy.name,
            description: toy.description,
            release_date: toy.release_date,
            toy_category: toy.toy_category,
            was_included_in_home: toy.was_included_in_home,
        }
    }
}

/// Decodes a toy write body, reporting every failing field at once.
pub fn decode(body: &Value) -> Result<ToyWriteParams, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = field::required_string(body, "name", 150, &mut errors);
    let description = field::required_string(body, "description", 250, &mut errors);
    let release_date = field::required_datetime(body, "release_date", &mut errors);
    let toy_category = field::required_string(body, "toy_category", 200, &mut errors);
    let was_included_in_home = field::optional_bool(body, "was_included_in_home", false, &mut errors);

    match (name, description, release_date, toy_category) {
        (Some(name), Some(description), Some(release_date), Some(toy_category))
            if errors.is_empty() =>
        {
            Ok(ToyWriteParams {
                name,
                description,
                release_date,
                toy_category,
                was_included_in_home,
            })
        }
        _ => Err(errors),
    }
}

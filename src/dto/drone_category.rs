use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::{
    dto::field,
    error::validation::FieldErrors,
    model::drone_category::{CategoryWithDrones, CategoryWriteParams},
};

/// Wire representation of a drone category, with links to its drones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DroneCategoryDto {
    pub id: i32,
    pub name: String,
    pub drones: Vec<String>,
}

impl From<CategoryWithDrones> for DroneCategoryDto {
    fn from(category: CategoryWithDrones) -> Self {
        Self {
            id: category.category.id,
            name: category.category.name,
            drones: category
                .drone_ids
                .into_iter()
                .map(|id| format!("/drones/{}", id))
                .collect(),
        }
    }
}

/// Query parameters accepted by the drone category list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CategoryListQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    /// Exact name filter.
    pub name: Option<String>,
    /// Name prefix search.
    pub search: Option<String>,
    /// Ordering field, prefixed with `-` for descending.
    pub ordering: Option<String>,
}

/// Decodes a drone category write body.
pub fn decode(body: &Value) -> Result<CategoryWriteParams, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = field::required_string(body, "name", 250, &mut errors);

    match name {
        Some(name) if errors.is_empty() => Ok(CategoryWriteParams { name }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn links_related_drones_by_id() {
        let dto = DroneCategoryDto::from(CategoryWithDrones {
            category: entity::drone_category::Model {
                id: 1,
                name: "Quadcopter".to_string(),
            },
            drone_ids: vec![2, 5],
        });

        assert_eq!(dto.drones, vec!["/drones/2", "/drones/5"]);
    }

    #[test]
    fn name_is_required() {
        let errors = decode(&json!({})).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors.contains("name"));
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error body, e.g. `{"detail": "Not found."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DetailDto {
    pub detail: String,
}

/// Body of the API root endpoint: resource name to collection path.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiRootDto {
    #[serde(rename = "drone-categories")]
    pub drone_categories: String,
    pub drones: String,
    pub pilots: String,
    pub competitions: String,
    pub toys: String,
}

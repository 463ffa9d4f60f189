use axum::Json;

use crate::dto::api::ApiRootDto;

/// Tag for grouping the API root endpoint in OpenAPI documentation
pub static ROOT_TAG: &str = "root";

/// Get the API entry point.
///
/// Lists the collection path of every resource so clients can discover the
/// API without hardcoding routes.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Resource collection paths", body = ApiRootDto)
    ),
)]
pub async fn api_root() -> Json<ApiRootDto> {
    Json(ApiRootDto {
        drone_categories: "/drone-categories".to_string(),
        drones: "/drones".to_string(),
        pilots: "/pilots".to_string(),
        competitions: "/competitions".to_string(),
        toys: "/toys".to_string(),
    })
}

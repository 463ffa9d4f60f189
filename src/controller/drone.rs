use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    dto::{
        self,
        api::DetailDto,
        drone::{DroneDto, DroneListQuery},
        page::PaginatedDto,
    },
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::{drone::DroneListFilter, page::PageRequest},
    service::drone::DroneService,
    state::AppState,
};

/// Tag for grouping drone endpoints in OpenAPI documentation
pub static DRONE_TAG: &str = "drone";

/// Get a page of drones.
///
/// Reads are open; no credentials required. Supports filtering by name,
/// category name and competition flag, plus name prefix search and client
/// ordering.
#[utoipa::path(
    get,
    path = "/drones",
    tag = DRONE_TAG,
    params(DroneListQuery),
    responses(
        (status = 200, description = "One page of drones"),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn list_drones(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<DroneListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::from_query(query.limit, query.offset);
    let filter = DroneListFilter {
        name: query.name,
        drone_category: query.drone_category,
        has_it_competed: query.has_it_competed,
        search: query.search,
        ordering: query.ordering,
    };

    let drones = DroneService::new(&state.db).get_page(page, &filter).await?;

    Ok(Json(PaginatedDto::from_page(
        uri.path(),
        drones.map(DroneDto::from),
    )))
}

/// Get a single drone by ID.
#[utoipa::path(
    get,
    path = "/drones/{id}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "The drone", body = DroneDto),
        (status = 404, description = "No drone with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn get_drone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let drone = DroneService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found.".to_string()))?;

    Ok(Json(DroneDto::from(drone)))
}

/// Create a new drone owned by the authenticated user.
///
/// # Access Control
/// - Requires a valid API token
///
/// # Returns
/// - `201 Created` - The stored drone with its assigned ID
/// - `400 Bad Request` - Validation errors, including an unknown category name
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/drones",
    tag = DRONE_TAG,
    responses(
        (status = 201, description = "The stored drone", body = DroneDto),
        (status = 400, description = "Per-field validation error map"),
        (status = 401, description = "Missing or invalid token", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn create_drone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require_token().await?;

    let params = dto::drone::decode(&body)?;

    let drone = DroneService::new(&state.db)
        .create(params, Some(user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(DroneDto::from(drone))))
}

/// Replace a drone.
///
/// Full replacement of every user-settable field. Only the drone's owner may
/// update it.
///
/// # Access Control
/// - Requires a valid API token
/// - The authenticated user must own the drone
#[utoipa::path(
    put,
    path = "/drones/{id}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "The updated drone", body = DroneDto),
        (status = 400, description = "Per-field validation error map"),
        (status = 401, description = "Missing or invalid token", body = DetailDto),
        (status = 403, description = "Authenticated user does not own the drone", body = DetailDto),
        (status = 404, description = "No drone with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn update_drone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require_token().await?;

    let service = DroneService::new(&state.db);

    let existing = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found.".to_string()))?;

    if existing.drone.owner_id != Some(user.id) {
        return Err(AuthError::PermissionDenied.into());
    }

    let params = dto::drone::decode(&body)?;

    let updated = service.overwrite(existing.drone, params).await?;

    Ok(Json(DroneDto::from(updated)))
}

/// Delete a drone.
///
/// # Access Control
/// - Requires a valid API token
/// - The authenticated user must own the drone
#[utoipa::path(
    delete,
    path = "/drones/{id}",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 204, description = "The drone was deleted"),
        (status = 401, description = "Missing or invalid token", body = DetailDto),
        (status = 403, description = "Authenticated user does not own the drone", body = DetailDto),
        (status = 404, description = "No drone with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn delete_drone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require_token().await?;

    let service = DroneService::new(&state.db);

    let existing = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found.".to_string()))?;

    if existing.drone.owner_id != Some(user.id) {
        return Err(AuthError::PermissionDenied.into());
    }

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

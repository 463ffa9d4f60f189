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
        page::PaginatedDto,
        pilot::{PilotDto, PilotListQuery},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::{page::PageRequest, pilot::PilotListFilter},
    service::pilot::PilotService,
    state::AppState,
};

/// Tag for grouping pilot endpoints in OpenAPI documentation
pub static PILOT_TAG: &str = "pilot";

/// Get a page of pilots with their competitions nested.
///
/// # Access Control
/// - Requires a valid API token; every pilot endpoint does
#[utoipa::path(
    get,
    path = "/pilots",
    tag = PILOT_TAG,
    params(PilotListQuery),
    responses(
        (status = 200, description = "One page of pilots"),
        (status = 401, description = "Missing or invalid token", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn list_pilots(
    State(state): State<AppState>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PilotListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers).require_token().await?;

    let page = PageRequest::from_query(query.limit, query.offset);
    let filter = PilotListFilter {
        name: query.name,
        gender: query.gender,
        races_count: query.races_count,
        search: query.search,
        ordering: query.ordering,
    };

    let pilots = PilotService::new(&state.db).get_page(page, &filter).await?;

    Ok(Json(PaginatedDto::from_page(
        uri.path(),
        pilots.map(PilotDto::from),
    )))
}

/// Get a single pilot by ID with their competitions nested.
#[utoipa::path(
    get,
    path = "/pilots/{id}",
    tag = PILOT_TAG,
    params(
        ("id" = i32, Path, description = "Pilot ID")
    ),
    responses(
        (status = 200, description = "The pilot", body = PilotDto),
        (status = 401, description = "Missing or invalid token", body = DetailDto),
        (status = 404, description = "No pilot with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn get_pilot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers).require_token().await?;

    let pilot = PilotService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found.".to_string()))?;

    Ok(Json(PilotDto::from(pilot)))
}

/// Create a new pilot.
#[utoipa::path(
    post,
    path = "/pilots",
    tag = PILOT_TAG,
    responses(
        (status = 201, description = "The stored pilot", body = PilotDto),
        (status = 400, description = "Per-field validation error map"),
        (status = 401, description = "Missing or invalid token", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn create_pilot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers).require_token().await?;

    let params = dto::pilot::decode(&body)?;

    let pilot = PilotService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(PilotDto::from(pilot))))
}

/// Replace a pilot.
///
/// Full replacement of every user-settable field.
#[utoipa::path(
    put,
    path = "/pilots/{id}",
    tag = PILOT_TAG,
    params(
        ("id" = i32, Path, description = "Pilot ID")
    ),
    responses(
        (status = 200, description = "The updated pilot", body = PilotDto),
        (status = 400, description = "Per-field validation error map"),
        (status = 401, description = "Missing or invalid token", body = DetailDto),
        (status = 404, description = "No pilot with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn update_pilot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers).require_token().await?;

    let service = PilotService::new(&state.db);

    let existing = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found.".to_string()))?;

    let params = dto::pilot::decode(&body)?;

    let updated = service.overwrite(existing.pilot, params).await?;

    Ok(Json(PilotDto::from(updated)))
}

/// Delete a pilot and their competitions.
#[utoipa::path(
    delete,
    path = "/pilots/{id}",
    tag = PILOT_TAG,
    params(
        ("id" = i32, Path, description = "Pilot ID")
    ),
    responses(
        (status = 204, description = "The pilot was deleted"),
        (status = 401, description = "Missing or invalid token", body = DetailDto),
        (status = 404, description = "No pilot with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn delete_pilot(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &headers).require_token().await?;

    if PilotService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Not found.".to_string()))
    }
}

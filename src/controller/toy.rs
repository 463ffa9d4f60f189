use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::{
    dto::{self, toy::ToyDto},
    error::AppError,
    service::toy::ToyService,
    state::AppState,
};

/// Tag for grouping toy endpoints in OpenAPI documentation
pub static TOY_TAG: &str = "toy";

/// Get every toy.
///
/// Returns a plain JSON array of all toys, ordered by name.
///
/// # Returns
/// - `200 OK` - All toys
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/toys",
    tag = TOY_TAG,
    responses(
        (status = 200, description = "All toys", body = Vec<ToyDto>),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn list_toys(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let toys = ToyService::new(&state.db).get_all().await?;

    Ok(Json(
        toys.into_iter().map(ToyDto::from).collect::<Vec<_>>(),
    ))
}

/// Get a single toy by ID.
///
/// # Returns
/// - `200 OK` - The toy
/// - `404 Not Found` - No toy with that ID; the body is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/toys/{id}",
    tag = TOY_TAG,
    params(
        ("id" = i32, Path, description = "Toy ID")
    ),
    responses(
        (status = 200, description = "The toy", body = ToyDto),
        (status = 404, description = "No toy with that ID"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_toy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    match ToyService::new(&state.db).get_by_id(id).await? {
        Some(toy) => Ok(Json(ToyDto::from(toy)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Create a new toy.
///
/// The body is validated field-by-field; a 400 response lists every missing
/// or malformed field, not just the first.
///
/// # Returns
/// - `201 Created` - The stored toy with its assigned ID
/// - `400 Bad Request` - Per-field validation error map
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/toys",
    tag = TOY_TAG,
    responses(
        (status = 201, description = "The stored toy", body = ToyDto),
        (status = 400, description = "Per-field validation error map"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_toy(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let params = dto::toy::decode(&body)?;

    let toy = ToyService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(ToyDto::from(toy))))
}

/// Replace a toy.
///
/// Full replacement: every user-settable field must be present in the body.
/// Existence is checked before the body is validated, so an unknown ID is a
/// 404 even with a bad body.
///
/// # Returns
/// - `200 OK` - The updated toy
/// - `400 Bad Request` - Per-field validation error map
/// - `404 Not Found` - No toy with that ID; the body is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/toys/{id}",
    tag = TOY_TAG,
    params(
        ("id" = i32, Path, description = "Toy ID")
    ),
    responses(
        (status = 200, description = "The updated toy", body = ToyDto),
        (status = 400, description = "Per-field validation error map"),
        (status = 404, description = "No toy with that ID"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_toy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    let service = ToyService::new(&state.db);

    let Some(existing) = service.get_by_id(id).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let params = dto::toy::decode(&body)?;

    let updated = service.overwrite(existing, params).await?;

    Ok(Json(ToyDto::from(updated)).into_response())
}

/// Delete a toy.
///
/// # Returns
/// - `204 No Content` - The toy was deleted
/// - `404 Not Found` - No toy with that ID; the body is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/toys/{id}",
    tag = TOY_TAG,
    params(
        ("id" = i32, Path, description = "Toy ID")
    ),
    responses(
        (status = 204, description = "The toy was deleted"),
        (status = 404, description = "No toy with that ID"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_toy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    if ToyService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(StatusCode::NOT_FOUND.into_response())
    }
}

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    dto::{
        self,
        api::DetailDto,
        competition::{CompetitionDto, CompetitionListQuery},
        page::PaginatedDto,
    },
    error::AppError,
    model::{competition::CompetitionListFilter, page::PageRequest},
    service::competition::CompetitionService,
    state::AppState,
};

/// Tag for grouping competition endpoints in OpenAPI documentation
pub static COMPETITION_TAG: &str = "competition";

/// Get a page of competitions, longest distance first.
///
/// Supports exact filters on distance and names plus range filters on
/// distance and achievement date.
#[utoipa::path(
    get,
    path = "/competitions",
    tag = COMPETITION_TAG,
    params(CompetitionListQuery),
    responses(
        (status = 200, description = "One page of competitions"),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn list_competitions(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<CompetitionListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::from_query(query.limit, query.offset);
    let filter = CompetitionListFilter {
        distance_in_feet: query.distance_in_feet,
        min_distance_in_feet: query.min_distance_in_feet,
        max_distance_in_feet: query.max_distance_in_feet,
        from_achievement_date: query.from_achievement_date,
        to_achievement_date: query.to_achievement_date,
        drone_name: query.drone_name,
        pilot_name: query.pilot_name,
        ordering: query.ordering,
    };

    let competitions = CompetitionService::new(&state.db)
        .get_page(page, &filter)
        .await?;

    Ok(Json(PaginatedDto::from_page(
        uri.path(),
        competitions.map(CompetitionDto::from),
    )))
}

/// Get a single competition by ID.
#[utoipa::path(
    get,
    path = "/competitions/{id}",
    tag = COMPETITION_TAG,
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "The competition", body = CompetitionDto),
        (status = 404, description = "No competition with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn get_competition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let competition = CompetitionService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found.".to_string()))?;

    Ok(Json(CompetitionDto::from(competition)))
}

/// Create a new competition.
///
/// Pilot and drone are referenced by name; unknown names are reported as
/// validation errors, both at once when both are wrong.
#[utoipa::path(
    post,
    path = "/competitions",
    tag = COMPETITION_TAG,
    responses(
        (status = 201, description = "The stored competition", body = CompetitionDto),
        (status = 400, description = "Per-field validation error map"),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn create_competition(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let params = dto::competition::decode(&body)?;

    let competition = CompetitionService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(CompetitionDto::from(competition))))
}

/// Replace a competition.
///
/// Full replacement of every user-settable field.
#[utoipa::path(
    put,
    path = "/competitions/{id}",
    tag = COMPETITION_TAG,
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "The updated competition", body = CompetitionDto),
        (status = 400, description = "Per-field validation error map"),
        (status = 404, description = "No competition with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn update_competition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let service = CompetitionService::new(&state.db);

    let existing = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found.".to_string()))?;

    let params = dto::competition::decode(&body)?;

    let updated = service.overwrite(existing.competition, params).await?;

    Ok(Json(CompetitionDto::from(updated)))
}

/// Delete a competition.
#[utoipa::path(
    delete,
    path = "/competitions/{id}",
    tag = COMPETITION_TAG,
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 204, description = "The competition was deleted"),
        (status = 404, description = "No competition with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn delete_competition(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if CompetitionService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Not found.".to_string()))
    }
}

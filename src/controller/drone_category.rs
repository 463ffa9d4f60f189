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
        drone_category::{CategoryListQuery, DroneCategoryDto},
        page::PaginatedDto,
    },
    error::AppError,
    model::{drone_category::CategoryListFilter, page::PageRequest},
    service::drone_category::CategoryService,
    state::AppState,
};

/// Tag for grouping drone category endpoints in OpenAPI documentation
pub static DRONE_CATEGORY_TAG: &str = "drone-category";

/// Get a page of drone categories.
///
/// Supports exact-name filtering, name prefix search, and client ordering on
/// top of the paginated envelope.
#[utoipa::path(
    get,
    path = "/drone-categories",
    tag = DRONE_CATEGORY_TAG,
    params(CategoryListQuery),
    responses(
        (status = 200, description = "One page of drone categories"),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn list_categories(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<CategoryListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::from_query(query.limit, query.offset);
    let filter = CategoryListFilter {
        name: query.name,
        search: query.search,
        ordering: query.ordering,
    };

    let categories = CategoryService::new(&state.db).get_page(page, &filter).await?;

    Ok(Json(PaginatedDto::from_page(
        uri.path(),
        categories.map(DroneCategoryDto::from),
    )))
}

/// Get a single drone category by ID.
#[utoipa::path(
    get,
    path = "/drone-categories/{id}",
    tag = DRONE_CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Drone category ID")
    ),
    responses(
        (status = 200, description = "The drone category", body = DroneCategoryDto),
        (status = 404, description = "No category with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found.".to_string()))?;

    Ok(Json(DroneCategoryDto::from(category)))
}

/// Create a new drone category.
///
/// # Returns
/// - `201 Created` - The stored category with its assigned ID
/// - `400 Bad Request` - Missing name or a name already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/drone-categories",
    tag = DRONE_CATEGORY_TAG,
    responses(
        (status = 201, description = "The stored category", body = DroneCategoryDto),
        (status = 400, description = "Per-field validation error map"),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let params = dto::drone_category::decode(&body)?;

    let category = CategoryService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(DroneCategoryDto::from(category))))
}

/// Replace a drone category.
///
/// Full replacement of the single user-settable field, the name.
#[utoipa::path(
    put,
    path = "/drone-categories/{id}",
    tag = DRONE_CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Drone category ID")
    ),
    responses(
        (status = 200, description = "The updated category", body = DroneCategoryDto),
        (status = 400, description = "Per-field validation error map"),
        (status = 404, description = "No category with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let existing = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found.".to_string()))?;

    let params = dto::drone_category::decode(&body)?;

    let updated = service.overwrite(existing.category, params).await?;

    Ok(Json(DroneCategoryDto::from(updated)))
}

/// Delete a drone category and the drones assigned to it.
#[utoipa::path(
    delete,
    path = "/drone-categories/{id}",
    tag = DRONE_CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Drone category ID")
    ),
    responses(
        (status = 204, description = "The category was deleted"),
        (status = 404, description = "No category with that ID", body = DetailDto),
        (status = 500, description = "Internal server error", body = DetailDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    if CategoryService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Not found.".to_string()))
    }
}

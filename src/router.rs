use std::sync::Arc;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{competition, drone, drone_category, pilot, root, toy},
    error::AppError,
    state::AppState,
};

/// Requests available immediately to a fresh client on a throttled group.
const THROTTLE_BURST_SIZE: u32 = 3;

/// Seconds to replenish one request on a throttled group.
const THROTTLE_REPLENISH_SECONDS: u64 = 1;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::api_root,
        toy::list_toys,
        toy::get_toy,
        toy::create_toy,
        toy::update_toy,
        toy::delete_toy,
        drone_category::list_categories,
        drone_category::get_category,
        drone_category::create_category,
        drone_category::update_category,
        drone_category::delete_category,
        drone::list_drones,
        drone::get_drone,
        drone::create_drone,
        drone::update_drone,
        drone::delete_drone,
        pilot::list_pilots,
        pilot::get_pilot,
        pilot::create_pilot,
        pilot::update_pilot,
        pilot::delete_pilot,
        competition::list_competitions,
        competition::get_competition,
        competition::create_competition,
        competition::update_competition,
        competition::delete_competition,
    ),
    tags(
        (name = "root", description = "API entry point"),
        (name = "toy", description = "Toy resource"),
        (name = "drone-category", description = "Drone category resource"),
        (name = "drone", description = "Drone resource"),
        (name = "pilot", description = "Pilot resource"),
        (name = "competition", description = "Competition resource"),
    )
)]
pub struct ApiDoc;

/// Registers a handler set under both the bare path and its trailing-slash
/// spelling; clients of the original API use the two interchangeably.
fn route_both(
    router: Router<AppState>,
    path: &str,
    handlers: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, handlers.clone())
        .route(&format!("{}/", path), handlers)
}

pub(crate) fn toy_routes() -> Router<AppState> {
    let routes = route_both(
        Router::new(),
        "/toys",
        get(toy::list_toys).post(toy::create_toy),
    );
    route_both(
        routes,
        "/toys/{id}",
        get(toy::get_toy)
            .put(toy::update_toy)
            .delete(toy::delete_toy),
    )
}

pub(crate) fn category_routes() -> Router<AppState> {
    let routes = route_both(
        Router::new(),
        "/drone-categories",
        get(drone_category::list_categories).post(drone_category::create_category),
    );
    route_both(
        routes,
        "/drone-categories/{id}",
        get(drone_category::get_category)
            .put(drone_category::update_category)
            .delete(drone_category::delete_category),
    )
}

pub(crate) fn drone_routes() -> Router<AppState> {
    let routes = route_both(
        Router::new(),
        "/drones",
        get(drone::list_drones).post(drone::create_drone),
    );
    route_both(
        routes,
        "/drones/{id}",
        get(drone::get_drone)
            .put(drone::update_drone)
            .delete(drone::delete_drone),
    )
}

pub(crate) fn pilot_routes() -> Router<AppState> {
    let routes = route_both(
        Router::new(),
        "/pilots",
        get(pilot::list_pilots).post(pilot::create_pilot),
    );
    route_both(
        routes,
        "/pilots/{id}",
        get(pilot::get_pilot)
            .put(pilot::update_pilot)
            .delete(pilot::delete_pilot),
    )
}

pub(crate) fn competition_routes() -> Router<AppState> {
    let routes = route_both(
        Router::new(),
        "/competitions",
        get(competition::list_competitions).post(competition::create_competition),
    );
    route_both(
        routes,
        "/competitions/{id}",
        get(competition::get_competition)
            .put(competition::update_competition)
            .delete(competition::delete_competition),
    )
}

/// Builds the application router.
///
/// Drones and competitions each get their own rate limiter keyed by peer IP,
/// mirroring the per-scope throttles the API has always advertised. The rest
/// of the routes are unthrottled.
pub fn router() -> Result<Router<AppState>, AppError> {
    let drone_throttle = GovernorConfigBuilder::default()
        .per_second(THROTTLE_REPLENISH_SECONDS)
        .burst_size(THROTTLE_BURST_SIZE)
        .finish()
        .ok_or_else(invalid_throttle)?;

    let competition_throttle = GovernorConfigBuilder::default()
        .per_second(THROTTLE_REPLENISH_SECONDS)
        .burst_size(THROTTLE_BURST_SIZE)
        .finish()
        .ok_or_else(invalid_throttle)?;

    let router = Router::new()
        .route("/", get(root::api_root))
        .merge(toy_routes())
        .merge(category_routes())
        .merge(pilot_routes())
        .merge(drone_routes().layer(GovernorLayer::new(Arc::new(drone_throttle))))
        .merge(
            competition_routes().layer(GovernorLayer::new(Arc::new(competition_throttle))),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    Ok(router)
}

fn invalid_throttle() -> AppError {
    AppError::InternalError("Throttle configuration is invalid".to_string())
}

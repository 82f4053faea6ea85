use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::{ApiResponse, CreateRouteRequest, EnrichedRoute, RouteResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_route))
        .route("/latest", get(latest_routes))
}

/// POST /api/routes - Registrar una ruta
async fn create_route(
    State(state): State<AppState>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<Json<ApiResponse<RouteResponse>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

/// GET /api/routes/latest - Últimas rutas con distancia y ETA
async fn latest_routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrichedRoute>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller
        .latest(state.config.latest_routes_page_size)
        .await?;
    Ok(Json(response))
}

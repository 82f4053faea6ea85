use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::controllers::traccar_controller::TraccarController;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_traccar_router() -> Router<AppState> {
    Router::new()
        .route("/devices", get(devices))
        .route("/positions", get(positions))
}

fn controller(state: &AppState) -> TraccarController<crate::cache::RedisClient> {
    TraccarController::new(
        state.traccar.clone(),
        state.redis.clone(),
        state.redis.positions_key(),
        state.redis.position_snapshot_ttl(),
    )
}

/// GET /api/traccar/devices - Relay de dispositivos
async fn devices(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let response = controller(&state).devices().await?;
    Ok(Json(response))
}

/// GET /api/traccar/positions - Relay de posiciones con snapshot
async fn positions(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let response = controller(&state).positions().await?;
    Ok(Json(response))
}

//! Rutas de la API
//!
//! Este módulo ensambla el router completo de la aplicación.

pub mod eta_routes;
pub mod route_routes;
pub mod traccar_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Construir la aplicación completa con su estado
pub fn create_app(state: AppState) -> Router {
    if state.config.is_production() && state.config.cors_origins.is_empty() {
        log::warn!("⚠️ CORS permisivo en producción; configure CORS_ORIGINS");
    }

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/routes", route_routes::create_route_router())
        .nest("/api/eta", eta_routes::create_eta_router())
        .nest("/api/traccar", traccar_routes::create_traccar_router())
        .layer(cors_middleware(&state.config.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness probe
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet_tracking",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

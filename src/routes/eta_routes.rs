use axum::{routing::post, Json, Router};

use crate::dto::eta_dto::{EtaPredictionRequest, EtaPredictionResponse};
use crate::services::distance::{eta_minutes, haversine_km, round2};
use crate::state::AppState;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_coordinates;

pub fn create_eta_router() -> Router<AppState> {
    Router::new().route("/predict", post(predict_eta))
}

/// POST /api/eta/predict - Estimación punto a punto, sin almacenamiento
async fn predict_eta(
    Json(request): Json<EtaPredictionRequest>,
) -> Result<Json<EtaPredictionResponse>, AppError> {
    validate_coordinates(request.current_lat, request.current_lng)
        .map_err(|_| validation_error("current", "coordinates out of range"))?;
    validate_coordinates(request.dropoff_lat, request.dropoff_lng)
        .map_err(|_| validation_error("dropoff", "coordinates out of range"))?;

    let km = haversine_km(
        request.current_lat,
        request.current_lng,
        request.dropoff_lat,
        request.dropoff_lng,
    );

    Ok(Json(EtaPredictionResponse {
        distance_km: round2(km),
        eta_minutes: eta_minutes(km),
    }))
}

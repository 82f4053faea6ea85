use serde::{Deserialize, Serialize};

// Request de estimación punto a punto
#[derive(Debug, Deserialize)]
pub struct EtaPredictionRequest {
    pub current_lat: f64,
    pub current_lng: f64,
    pub dropoff_lat: f64,
    pub dropoff_lng: f64,
}

// Response con la distancia y el ETA estimados
#[derive(Debug, Serialize)]
pub struct EtaPredictionResponse {
    pub distance_km: f64,
    pub eta_minutes: i64,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::RouteRecord;

// Request para registrar una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(length(max = 500, message = "origin must be at most 500 characters"))]
    pub origin: String,
    #[validate(length(max = 500, message = "destination must be at most 500 characters"))]
    pub destination: String,
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_lng: Option<f64>,
}

// Response de ruta persistida
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<RouteRecord> for RouteResponse {
    fn from(record: RouteRecord) -> Self {
        Self {
            id: record.id,
            origin: record.origin,
            destination: record.destination,
            start_lat: record.start_lat,
            start_lng: record.start_lng,
            end_lat: record.end_lat,
            end_lng: record.end_lng,
            created_at: record.created_at,
        }
    }
}

// Ruta enriquecida para listados: campos almacenados más los derivados.
// Los derivados son null cuando falta un par de coordenadas válido.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRoute {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub distance_km: Option<f64>,
    pub eta_minutes: Option<i64>,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

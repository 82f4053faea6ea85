//! Modelo de RouteRecord
//!
//! Este módulo contiene el struct RouteRecord y el tipo de coordenadas
//! validado. Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::validation::validate_coordinates;

/// Registro de ruta - mapea exactamente a la tabla routes
///
/// Las coordenadas son opcionales: registros legacy pueden carecer de
/// ellas y el pipeline de enriquecimiento las trata registro a registro.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RouteRecord {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub start_lat: Option<f64>,
    pub start_lng: Option<f64>,
    pub end_lat: Option<f64>,
    pub end_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl RouteRecord {
    /// Coordenadas de inicio, solo si el par completo es válido
    pub fn start_coordinates(&self) -> Option<Coordinates> {
        match (self.start_lat, self.start_lng) {
            (Some(lat), Some(lng)) => Coordinates::try_new(lat, lng),
            _ => None,
        }
    }

    /// Coordenadas de destino, solo si el par completo es válido
    pub fn end_coordinates(&self) -> Option<Coordinates> {
        match (self.end_lat, self.end_lng) {
            (Some(lat), Some(lng)) => Coordinates::try_new(lat, lng),
            _ => None,
        }
    }
}

/// Par de coordenadas validado
///
/// Solo se puede construir vía `try_new`, que garantiza componentes
/// finitos y dentro de rango (lat ±90, lng ±180).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Construir el par si ambos componentes son válidos
    pub fn try_new(lat: f64, lng: f64) -> Option<Self> {
        validate_coordinates(lat, lng).ok().map(|_| Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

//! Cálculo de distancia y ETA
//!
//! Núcleo puro de cómputo: distancia de gran círculo (haversine) y una
//! estimación simple de ETA a velocidad media fija. Sin estado y sin I/O.

use crate::models::Coordinates;

/// Radio medio de la Tierra en kilómetros
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Velocidad media asumida para la estimación de ETA (km/h)
pub const ASSUMED_AVG_SPEED_KMH: f64 = 40.0;

/// Distancia de gran círculo entre dos puntos, en kilómetros
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // El error de redondeo puede dejar `a` marginalmente fuera de [0, 1]
    // en puntos casi antipodales; sqrt(1 - a) daría NaN sin el clamp.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distancia entre dos pares de coordenadas validados
pub fn distance_between(from: Coordinates, to: Coordinates) -> f64 {
    haversine_km(from.lat(), from.lng(), to.lat(), to.lng())
}

/// ETA en minutos a una velocidad dada, redondeado al minuto entero
/// (las mitades se alejan de cero)
pub fn eta_minutes_at(distance_km: f64, speed_kmh: f64) -> i64 {
    (distance_km / speed_kmh * 60.0).round() as i64
}

/// ETA en minutos a la velocidad media asumida
pub fn eta_minutes(distance_km: f64) -> i64 {
    eta_minutes_at(distance_km, ASSUMED_AVG_SPEED_KMH)
}

/// Redondear a dos decimales para presentación
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Enriquecimiento de rutas
//!
//! Proyección de solo lectura: cada registro sale con `distance_km` y
//! `eta_minutes` derivados, o ambos en null si le falta un par de
//! coordenadas completo y válido. Nunca se persiste nada de aquí.

use crate::dto::EnrichedRoute;
use crate::models::RouteRecord;
use crate::services::distance::{distance_between, eta_minutes, round2};

/// Proyectar un registro con sus campos derivados
///
/// Un registro sin coordenadas válidas en ambos extremos pasa con los
/// derivados en null; el lote nunca falla por un registro incompleto.
pub fn enrich_route(record: RouteRecord) -> EnrichedRoute {
    let derived = match (record.start_coordinates(), record.end_coordinates()) {
        (Some(start), Some(end)) => {
            let km = distance_between(start, end);
            // ETA sobre la distancia sin redondear; el redondeo a dos
            // decimales es solo presentación.
            Some((round2(km), eta_minutes(km)))
        }
        _ => None,
    };

    EnrichedRoute {
        id: record.id,
        origin: record.origin,
        destination: record.destination,
        start_lat: record.start_lat,
        start_lng: record.start_lng,
        end_lat: record.end_lat,
        end_lng: record.end_lng,
        created_at: record.created_at,
        distance_km: derived.map(|(km, _)| km),
        eta_minutes: derived.map(|(_, eta)| eta),
    }
}

/// Enriquecer un lote conservando cantidad y orden
pub fn enrich_routes(records: Vec<RouteRecord>) -> Vec<EnrichedRoute> {
    records.into_iter().map(enrich_route).collect()
}

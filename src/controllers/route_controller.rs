use sqlx::PgPool;
use validator::Validate;

use crate::dto::route_dto::{ApiResponse, CreateRouteRequest, EnrichedRoute, RouteResponse};
use crate::repositories::route_repository::RouteRepository;
use crate::services::route_enrichment::enrich_routes;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_coordinates;

pub struct RouteController {
    repository: RouteRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool),
        }
    }

    /// Registrar una ruta nueva
    pub async fn create(
        &self,
        request: CreateRouteRequest,
    ) -> AppResult<ApiResponse<RouteResponse>> {
        // Longitudes máximas vía derive
        request.validate()?;

        let origin = request.origin.trim();
        if origin.is_empty() {
            return Err(validation_error("origin", "origin must not be empty"));
        }

        let destination = request.destination.trim();
        if destination.is_empty() {
            return Err(validation_error(
                "destination",
                "destination must not be empty",
            ));
        }

        let start = coordinate_pair(request.start_lat, request.start_lng, "start")?;
        let end = coordinate_pair(request.end_lat, request.end_lng, "end")?;

        let record = self
            .repository
            .create(origin.to_string(), destination.to_string(), start, end)
            .await?;

        log::info!(
            "✅ Ruta registrada: {} -> {} ({})",
            record.origin,
            record.destination,
            record.id
        );

        Ok(ApiResponse::success_with_message(
            RouteResponse::from(record),
            "Ruta registrada exitosamente".to_string(),
        ))
    }

    /// Últimas rutas, enriquecidas con distancia y ETA
    pub async fn latest(&self, limit: i64) -> AppResult<Vec<EnrichedRoute>> {
        let records = self.repository.find_latest(limit).await?;
        log::info!("🔍 {} rutas recuperadas para enriquecer", records.len());

        Ok(enrich_routes(records))
    }
}

/// Un par de coordenadas se acepta completo o ausente; el par a medias
/// es un error de validación.
fn coordinate_pair(
    lat: Option<f64>,
    lng: Option<f64>,
    field: &'static str,
) -> AppResult<Option<(f64, f64)>> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            validate_coordinates(lat, lng)
                .map_err(|_| validation_error(field, "coordinates out of range"))?;
            Ok(Some((lat, lng)))
        }
        (None, None) => Ok(None),
        _ => Err(validation_error(
            field,
            "latitude and longitude must be provided together",
        )),
    }
}

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::RouteRecord;
use crate::utils::errors::AppResult;

/// Acceso a la tabla `routes`
pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un registro de ruta nuevo
    pub async fn create(
        &self,
        origin: String,
        destination: String,
        start: Option<(f64, f64)>,
        end: Option<(f64, f64)>,
    ) -> AppResult<RouteRecord> {
        let record = sqlx::query_as::<_, RouteRecord>(
            r#"
            INSERT INTO routes (id, origin, destination, start_lat, start_lng, end_lat, end_lng, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(origin)
        .bind(destination)
        .bind(start.map(|(lat, _)| lat))
        .bind(start.map(|(_, lng)| lng))
        .bind(end.map(|(lat, _)| lat))
        .bind(end.map(|(_, lng)| lng))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Últimas `limit` rutas, las más recientes primero
    pub async fn find_latest(&self, limit: i64) -> AppResult<Vec<RouteRecord>> {
        let records = sqlx::query_as::<_, RouteRecord>(
            "SELECT * FROM routes ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}

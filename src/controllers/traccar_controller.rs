use serde_json::Value;

use crate::cache::redis_client::CacheOperations;
use crate::clients::TraccarClient;
use crate::utils::errors::AppResult;

/// Orquesta el relay hacia Traccar con snapshot de posiciones en cache
///
/// Genérico sobre las operaciones de cache para poder probar la ruta de
/// fallback sin un Redis vivo.
pub struct TraccarController<C: CacheOperations> {
    traccar: TraccarClient,
    cache: C,
    snapshot_key: String,
    snapshot_ttl: u64,
}

impl<C: CacheOperations> TraccarController<C> {
    pub fn new(traccar: TraccarClient, cache: C, snapshot_key: String, snapshot_ttl: u64) -> Self {
        Self {
            traccar,
            cache,
            snapshot_key,
            snapshot_ttl,
        }
    }

    /// Relay de dispositivos: passthrough directo, nunca se cachea
    pub async fn devices(&self) -> AppResult<Value> {
        self.traccar.devices().await
    }

    /// Relay de posiciones con snapshot en cache
    ///
    /// En éxito el cuerpo se guarda con TTL corto y se devuelve tal
    /// cual; si el proveedor falla se sirve el último snapshot vigente,
    /// y solo sin snapshot se propaga el error upstream.
    pub async fn positions(&self) -> AppResult<Value> {
        match self.traccar.positions().await {
            Ok(positions) => {
                if let Err(e) = self
                    .cache
                    .set(&self.snapshot_key, &positions, self.snapshot_ttl)
                    .await
                {
                    // Redis caído no puede tumbar un relay exitoso
                    log::warn!("⚠️ No se pudo guardar el snapshot de posiciones: {}", e);
                }
                Ok(positions)
            }
            Err(upstream_err) => match self.cache.get::<Value>(&self.snapshot_key).await {
                Ok(Some(snapshot)) => {
                    log::warn!("⚠️ Proveedor caído; sirviendo snapshot de posiciones");
                    Ok(snapshot)
                }
                Ok(None) => Err(upstream_err),
                Err(e) => {
                    log::warn!("⚠️ Error leyendo el snapshot de posiciones: {}", e);
                    Err(upstream_err)
                }
            },
        }
    }
}

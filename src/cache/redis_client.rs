use std::sync::Arc;

use anyhow::Result;
use redis::{aio::ConnectionManager, AsyncCommands, RedisResult};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use super::CacheConfig;

/// Operaciones de cache sobre valores serializados como JSON
#[async_trait::async_trait]
pub trait CacheOperations {
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>>;
    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T, ttl: u64) -> Result<()>;
}

/// Cliente Redis con conexión perezosa y operaciones async
///
/// La conexión real se abre en el primer uso; `ping()` permite forzarla
/// al arranque para detectar un Redis caído antes de servir tráfico.
#[derive(Clone)]
pub struct RedisClient {
    client: redis::Client,
    manager: Arc<OnceCell<ConnectionManager>>,
    config: CacheConfig,
}

impl RedisClient {
    /// Crear nuevo cliente Redis (valida la URL, no conecta todavía)
    pub fn new(config: CacheConfig) -> Result<Self> {
        let client = redis::Client::open(config.redis_url.clone())?;

        Ok(Self {
            client,
            manager: Arc::new(OnceCell::new()),
            config,
        })
    }

    /// Obtener el connection manager, conectando si hace falta
    async fn connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .manager
            .get_or_try_init(|| async {
                info!("🔗 Conectando a Redis...");
                let manager = ConnectionManager::new(self.client.clone()).await?;
                info!("✅ Redis conectado exitosamente");
                Ok::<_, anyhow::Error>(manager)
            })
            .await?;

        Ok(manager.clone())
    }

    /// Verificar la conexión con un PING
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.connection().await?;
        let _: () = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    /// Generar clave de cache con prefijo
    fn make_key(&self, prefix: &str, identifier: &str) -> String {
        format!("fleet_tracking:{}:{}", prefix, identifier)
    }

    /// Clave del snapshot de posiciones del proveedor de tracking
    pub fn positions_key(&self) -> String {
        self.make_key("traccar", "latest_positions")
    }

    /// TTL configurado para el snapshot de posiciones
    pub fn position_snapshot_ttl(&self) -> u64 {
        self.config.position_snapshot_ttl
    }
}

#[async_trait::async_trait]
impl CacheOperations for RedisClient {
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>> {
        // Un Redis caído degrada a cache MISS, nunca tumba la petición
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("⚠️ Redis no disponible para lectura de {}: {}", key, e);
                return Ok(None);
            }
        };

        match conn.get::<_, Option<String>>(key).await {
            Ok(Some(value)) => {
                debug!("📥 Cache HIT para clave: {}", key);
                let deserialized: T = serde_json::from_str(&value)?;
                Ok(Some(deserialized))
            }
            Ok(None) => {
                debug!("❌ Cache MISS para clave: {}", key);
                Ok(None)
            }
            Err(e) => {
                warn!("⚠️ Error leyendo cache para clave {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T, ttl: u64) -> Result<()> {
        let mut conn = self.connection().await?;

        let serialized = serde_json::to_string(value)?;

        // SET key value EX ttl
        let result: RedisResult<()> = redis::cmd("SET")
            .arg(key)
            .arg(serialized)
            .arg("EX")
            .arg(ttl)
            .query_async(&mut conn)
            .await;

        match result {
            Ok(()) => {
                debug!("💾 Cache SET para clave: {} (TTL: {}s)", key, ttl);
                Ok(())
            }
            Err(e) => {
                error!("❌ Error guardando en cache para clave {}: {}", key, e);
                Err(anyhow::anyhow!("Error de Redis: {}", e))
            }
        }
    }
}

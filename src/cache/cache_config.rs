//! Configuración de cache
//!
//! Este módulo contiene la configuración para el sistema de cache.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Configuración del cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub redis_url: String,
    /// TTL del snapshot de posiciones en segundos
    pub position_snapshot_ttl: u64,
}

impl CacheConfig {
    /// Cargar la configuración desde variables de entorno
    pub fn from_env() -> Result<Self> {
        let redis_url = env::var("REDIS_URL").context("REDIS_URL must be set")?;

        let position_snapshot_ttl = env::var("POSITION_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .context("POSITION_CACHE_TTL_SECS must be a valid number")?;

        Ok(Self {
            redis_url,
            position_snapshot_ttl,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            position_snapshot_ttl: 30,
        }
    }
}

//! Cliente del proveedor de tracking (Traccar)
//!
//! Relay fino sobre la API REST de Traccar: una llamada GET saliente con
//! basic auth por operación, timeout acotado y passthrough del JSON tal
//! cual llega. El cuerpo upstream nunca se reinterpreta ni se reordena.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::config::TraccarConfig;
use crate::utils::errors::{AppError, AppResult};

/// Cliente HTTP hacia el servidor Traccar configurado
#[derive(Clone)]
pub struct TraccarClient {
    http: Client,
    config: TraccarConfig,
}

impl TraccarClient {
    pub fn new(http: Client, config: TraccarConfig) -> Self {
        Self { http, config }
    }

    /// Lista de dispositivos del proveedor
    pub async fn devices(&self) -> AppResult<Value> {
        self.relay_get("/api/devices").await
    }

    /// Últimas posiciones conocidas de los dispositivos
    pub async fn positions(&self) -> AppResult<Value> {
        self.relay_get("/api/positions").await
    }

    async fn relay_get(&self, path: &str) -> AppResult<Value> {
        let url = format!("{}{}", self.config.base_url, path);
        log::info!("🌐 Relay GET {}", url);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ Error llamando al proveedor de tracking ({}): {}", path, e);
                AppError::Upstream(format!("request to {} failed", path))
            })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("❌ Proveedor de tracking retornó {} para {}", status, path);
            return Err(AppError::Upstream(format!(
                "upstream returned {} for {}",
                status, path
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            log::error!("❌ Respuesta no-JSON del proveedor para {}: {}", path, e);
            AppError::Upstream(format!("invalid JSON body from {}", path))
        })
    }
}

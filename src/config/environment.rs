//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de
//! configuración. Todo se carga una sola vez al arranque y se pasa como
//! valor inmutable dentro del estado compartido.

use anyhow::{ensure, Context, Result};
use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Tamaño de página para GET /api/routes/latest
    pub latest_routes_page_size: i64,
    pub traccar: TraccarConfig,
}

/// Credenciales y parámetros del proveedor de tracking (Traccar)
#[derive(Clone)]
pub struct TraccarConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub timeout_secs: u64,
}

// Debug manual para que la contraseña nunca llegue a los logs
impl std::fmt::Debug for TraccarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraccarConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde variables de entorno
    pub fn from_env() -> Result<Self> {
        let environment =
            env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let latest_routes_page_size = env::var("LATEST_ROUTES_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("LATEST_ROUTES_PAGE_SIZE must be a valid number")?;
        ensure!(
            latest_routes_page_size > 0,
            "LATEST_ROUTES_PAGE_SIZE must be greater than zero"
        );

        Ok(Self {
            environment,
            port,
            host,
            cors_origins,
            latest_routes_page_size,
            traccar: TraccarConfig::from_env()?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TraccarConfig {
    /// Cargar credenciales de Traccar desde variables de entorno
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("TRACCAR_BASE_URL")
            .context("TRACCAR_BASE_URL must be set")?
            .trim_end_matches('/')
            .to_string();
        let username = env::var("TRACCAR_USER").context("TRACCAR_USER must be set")?;
        let password = env::var("TRACCAR_PASS").context("TRACCAR_PASS must be set")?;
        let timeout_secs = env::var("TRACCAR_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("TRACCAR_TIMEOUT_SECS must be a valid number")?;

        Ok(Self {
            base_url,
            username,
            password,
            timeout_secs,
        })
    }
}

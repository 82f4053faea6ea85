//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use reqwest::Client;
use sqlx::PgPool;

use crate::cache::redis_client::RedisClient;
use crate::clients::TraccarClient;
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub redis: RedisClient,
    pub traccar: TraccarClient,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, redis: RedisClient) -> Self {
        // Un único Client compartido; reqwest ya multiplexa conexiones
        let traccar = TraccarClient::new(Client::new(), config.traccar.clone());

        Self {
            pool,
            config,
            redis,
            traccar,
        }
    }
}

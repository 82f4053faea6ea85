//! Cache
//!
//! Este módulo contiene el sistema de cache en Redis.

pub mod cache_config;
pub mod redis_client;

pub use cache_config::CacheConfig;
pub use redis_client::{CacheOperations, RedisClient};

//! Fleet Tracking Backend
//!
//! Backend web para una operación de flota pequeña: registro de rutas
//! con distancia y ETA calculadas al momento de leer, y relay hacia un
//! servidor Traccar con snapshot de posiciones en Redis.

pub mod cache;
pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;

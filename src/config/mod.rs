//! Módulo de configuración de la aplicación

pub mod database;
pub mod environment;

pub use environment::*;

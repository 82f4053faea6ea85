//! Base de datos

pub mod connection;

pub use connection::{create_pool, ensure_schema};

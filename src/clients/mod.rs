//! Clientes de APIs externas

pub mod traccar_client;

pub use traccar_client::TraccarClient;

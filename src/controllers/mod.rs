//! Controladores
//!
//! Orquestan validación, repositorios y servicios por operación de la API.

pub mod route_controller;
pub mod traccar_controller;

pub use route_controller::RouteController;
pub use traccar_controller::TraccarController;

//! DTOs de la API
//!
//! Requests y responses que viajan por el wire, separados de los
//! modelos de base de datos.

pub mod eta_dto;
pub mod route_dto;

pub use eta_dto::{EtaPredictionRequest, EtaPredictionResponse};
pub use route_dto::{ApiResponse, CreateRouteRequest, EnrichedRoute, RouteResponse};

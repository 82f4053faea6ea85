//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el núcleo
//! de cómputo de distancia/ETA y el pipeline de enriquecimiento de rutas.

pub mod distance;
pub mod route_enrichment;

pub use distance::*;
pub use route_enrichment::*;

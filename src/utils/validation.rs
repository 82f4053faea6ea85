//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos.

use validator::ValidationError;

/// Validar formato de coordenadas GPS
///
/// Rechaza valores no finitos (NaN o infinito pasarían un chequeo de rango
/// simple porque sus comparaciones siempre son falsas).
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), ValidationError> {
    if !lat.is_finite() || lat < -90.0 || lat > 90.0 {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &lat);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }

    if !lng.is_finite() || lng < -180.0 || lng > 180.0 {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &lng);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }

    Ok(())
}

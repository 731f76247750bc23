use serde::{Deserialize, Serialize};
use validator::Validate;

// Request para crear una estación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStationRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub name: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    /// `null` cuando el campo del formulario quedó vacío
    #[serde(rename = "capacidad", default)]
    pub capacity: Option<u32>,
    #[serde(rename = "bicicletasDisponibles", default)]
    pub available_bicycles: Option<u32>,
    #[serde(rename = "activa", default)]
    pub active: Option<bool>,
}

// Response de mensaje simple (p. ej. tras un DELETE)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

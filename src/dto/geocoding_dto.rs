use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ValidateAddressRequest {
    #[serde(rename = "direccion")]
    #[validate(length(min = 1, message = "La dirección no puede estar vacía"))]
    pub address: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReverseGeocodeRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

/// Resultado de validar una dirección contra la ciudad objetivo.
///
/// `valid == true && verified == false` significa que no hay geocodificador
/// configurado y la dirección se aceptó sin comprobar.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddressValidationResponse {
    #[serde(rename = "valida")]
    pub valid: bool,
    #[serde(rename = "verificada")]
    pub verified: bool,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(rename = "direccionFormateada")]
    pub formatted_address: Option<String>,
    #[serde(rename = "mensaje")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReverseGeocodeResponse {
    #[serde(rename = "encontrada")]
    pub found: bool,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "mensaje")]
    pub message: String,
}

use anyhow::Result;
use std::sync::Arc;

use crate::dto::geocoding_dto::{AddressValidationResponse, ReverseGeocodeResponse};
use crate::services::geocoding_service::{GeocodeResult, Geocoder};

/// Redondear a 6 decimales, la precisión que guarda el formulario
pub fn round_coordinate(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Valida direcciones restringidas a una única ciudad.
///
/// Solo se acepta el primer resultado del geocodificador y únicamente si su
/// `administrative_area_level_1` coincide con `target_city`.
pub struct AddressValidator {
    geocoder: Option<Arc<dyn Geocoder>>,
    target_city: String,
    region_suffix: String,
}

impl AddressValidator {
    pub fn new(
        geocoder: Option<Arc<dyn Geocoder>>,
        target_city: impl Into<String>,
        region_suffix: impl Into<String>,
    ) -> Self {
        Self {
            geocoder,
            target_city: target_city.into(),
            region_suffix: region_suffix.into(),
        }
    }

    pub fn target_city(&self) -> &str {
        &self.target_city
    }

    pub fn is_in_target_city(&self, result: &GeocodeResult) -> bool {
        result.administrative_area() == Some(self.target_city.as_str())
    }

    pub async fn validate(&self, address: &str) -> AddressValidationResponse {
        let Some(geocoder) = &self.geocoder else {
            log::warn!("⚠️ Geocodificador no configurado, dirección aceptada sin validar");
            return AddressValidationResponse {
                valid: true,
                verified: false,
                lat: None,
                lng: None,
                formatted_address: None,
                message: "Geocodificación no disponible - dirección aceptada sin validar".to_string(),
            };
        };

        let query = format!("{}{}", address.trim(), self.region_suffix);
        let results = match geocoder.geocode(&query).await {
            Ok(results) => results,
            Err(e) => {
                log::error!("❌ Error de geocodificación para '{}': {}", address, e);
                return self.rejected("Dirección no encontrada");
            }
        };

        match results.first() {
            Some(result) if self.is_in_target_city(result) => {
                let location = result.geometry.location;
                log::info!(
                    "✅ Dirección válida: {} -> ({}, {})",
                    address,
                    location.lat,
                    location.lng
                );
                AddressValidationResponse {
                    valid: true,
                    verified: true,
                    lat: Some(round_coordinate(location.lat)),
                    lng: Some(round_coordinate(location.lng)),
                    formatted_address: Some(result.formatted_address.clone()),
                    message: format!("Dirección válida encontrada en {}", self.target_city),
                }
            }
            Some(result) => {
                log::info!(
                    "🚫 Dirección fuera de {}: {:?}",
                    self.target_city,
                    result.administrative_area()
                );
                self.rejected(&format!("La dirección debe estar en {}", self.target_city))
            }
            None => self.rejected("Dirección no encontrada"),
        }
    }

    pub async fn reverse(&self, lat: f64, lng: f64) -> Result<ReverseGeocodeResponse> {
        let Some(geocoder) = &self.geocoder else {
            return Ok(ReverseGeocodeResponse {
                found: false,
                address: None,
                message: "Geocodificación no disponible".to_string(),
            });
        };

        let results = geocoder.reverse_geocode(lat, lng).await?;
        Ok(match results.into_iter().next() {
            Some(result) => ReverseGeocodeResponse {
                found: true,
                address: Some(result.formatted_address),
                message: "Dirección encontrada".to_string(),
            },
            None => ReverseGeocodeResponse {
                found: false,
                address: None,
                message: "No se encontró una dirección para esta ubicación".to_string(),
            },
        })
    }

    fn rejected(&self, message: &str) -> AddressValidationResponse {
        AddressValidationResponse {
            valid: false,
            verified: true,
            lat: None,
            lng: None,
            formatted_address: None,
            message: message.to_string(),
        }
    }
}

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Componente de dirección de un resultado de geocodificación
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Geometry {
    pub location: LatLng,
}

/// Un resultado de geocodificación (directa o inversa)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
}

impl GeocodeResult {
    /// Nombre largo del componente `administrative_area_level_1`, si existe
    pub fn administrative_area(&self) -> Option<&str> {
        self.address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == "administrative_area_level_1"))
            .map(|c| c.long_name.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct GoogleGeocodingResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

/// Proveedor de geocodificación
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resultados para una dirección, el más relevante primero
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>>;

    /// Resultados para unas coordenadas, el más preciso primero
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Vec<GeocodeResult>>;
}

/// Cliente de la API de Geocoding de Google Maps
pub struct GeocodingService {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeocodingService {
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            api_key,
            base_url,
            client,
        })
    }

    async fn fetch(&self, query: &str) -> Result<Vec<GeocodeResult>> {
        // La URL completa lleva la API key; no se registra.
        let url = format!(
            "{}?{}&language=es&key={}",
            self.base_url,
            query,
            urlencoding::encode(&self.api_key)
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "BikeInventory/1.0")
            .send()
            .await?;

        let status = response.status();
        log::debug!("📡 Geocoding response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Geocoding failed with status {}: {}", status, error_text);
            return Err(anyhow!("Geocoding failed: {}", status));
        }

        let body = response.text().await?;
        parse_geocoding_response(&body)
    }
}

#[async_trait]
impl Geocoder for GeocodingService {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>> {
        log::info!("🗺️ Geocoding address: {}", address);
        self.fetch(&format!("address={}", urlencoding::encode(address)))
            .await
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Vec<GeocodeResult>> {
        log::info!("🗺️ Reverse geocoding: ({}, {})", lat, lng);
        self.fetch(&format!("latlng={},{}", lat, lng)).await
    }
}

/// Interpretar el cuerpo de una respuesta de Google Geocoding.
///
/// `ZERO_RESULTS` es una lista vacía; cualquier otro estado distinto de `OK`
/// es un error.
pub fn parse_geocoding_response(body: &str) -> Result<Vec<GeocodeResult>> {
    let response: GoogleGeocodingResponse = serde_json::from_str(body)
        .map_err(|e| anyhow!("Failed to parse geocoding response: {}", e))?;

    match response.status.as_str() {
        "OK" => Ok(response.results),
        "ZERO_RESULTS" => Ok(Vec::new()),
        other => Err(anyhow!(
            "Geocoding status {}: {}",
            other,
            response.error_message.unwrap_or_default()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CABA_RESPONSE: &str = r#"{
        "results": [{
            "address_components": [
                { "long_name": "500", "short_name": "500", "types": ["street_number"] },
                { "long_name": "Avenida de Mayo", "short_name": "Av. de Mayo", "types": ["route"] },
                { "long_name": "Ciudad Autónoma de Buenos Aires", "short_name": "CABA",
                  "types": ["administrative_area_level_1", "political"] }
            ],
            "formatted_address": "Av. de Mayo 500, C1084 CABA, Argentina",
            "geometry": { "location": { "lat": -34.6084, "lng": -58.3731 } }
        }],
        "status": "OK"
    }"#;

    #[test]
    fn test_parse_ok_response() {
        let results = parse_geocoding_response(CABA_RESPONSE).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].geometry.location.lat, -34.6084);
        assert_eq!(
            results[0].administrative_area(),
            Some("Ciudad Autónoma de Buenos Aires")
        );
    }

    #[test]
    fn test_parse_zero_results_is_empty() {
        let results = parse_geocoding_response(r#"{ "results": [], "status": "ZERO_RESULTS" }"#).unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_denied_is_error() {
        let result = parse_geocoding_response(
            r#"{ "results": [], "status": "REQUEST_DENIED", "error_message": "invalid key" }"#,
        );

        let message = result.unwrap_err().to_string();
        assert!(message.contains("REQUEST_DENIED"));
        assert!(message.contains("invalid key"));
    }

    #[tokio::test]
    async fn test_geocoding_service() {
        // Requiere una API key real: GOOGLE_MAPS_API_KEY
        let key = std::env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default();
        if key.is_empty() {
            println!("⚠️ Skipping test: GOOGLE_MAPS_API_KEY not set");
            return;
        }

        let service = GeocodingService::new(key, DEFAULT_GEOCODING_URL.to_string()).unwrap();
        let results = service
            .geocode("Av. de Mayo 500, CABA, Argentina")
            .await
            .unwrap();

        assert!(!results.is_empty());
    }
}

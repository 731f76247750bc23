//! Harness compartido de los tests de integración.
//!
//! Cada `TestApp` trabaja sobre un directorio temporal propio, inicializado
//! con los datos de ejemplo, y usa el mismo router que `main`.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use bike_inventory::build_app;
use bike_inventory::config::environment::EnvironmentConfig;
use bike_inventory::database::seed::initialize_data;
use bike_inventory::database::JsonStore;
use bike_inventory::services::geocoding_service::{
    AddressComponent, GeocodeResult, Geocoder, Geometry, LatLng,
};
use bike_inventory::state::AppState;

pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    /// App con datos de ejemplo y sin geocodificador
    pub async fn seeded() -> Self {
        Self::with_geocoder(None).await
    }

    pub async fn with_geocoder(geocoder: Option<Arc<dyn Geocoder>>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_string_lossy().to_string();
        let public_dir = dir.path().join("no-public").to_string_lossy().to_string();

        let config = EnvironmentConfig::from_lookup(|key| match key {
            "DATA_DIR" => Some(data_dir.clone()),
            "PUBLIC_DIR" => Some(public_dir.clone()),
            _ => None,
        })
        .unwrap();

        let store = JsonStore::new(dir.path());
        initialize_data(&store).await.unwrap();

        let state = AppState::new(config, store, geocoder);
        Self {
            router: build_app(state),
            dir,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).unwrap()).await
    }

    /// Enviar un cuerpo tal cual, con el `Content-Type` indicado (o ninguno)
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Contenido actual de un archivo de datos
    pub fn read_file(&self, name: &str) -> Value {
        let raw = std::fs::read_to_string(self.file_path(name)).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    pub fn station(&self, id: &str) -> Value {
        self.read_file("estaciones.json")["estaciones"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["id"] == id)
            .cloned()
            .unwrap_or(Value::Null)
    }

    pub fn station_lists(&self, station_id: &str, bicycle_id: &str) -> usize {
        self.station(station_id)["bicicletasIds"]
            .as_array()
            .map(|ids| ids.iter().filter(|id| *id == bicycle_id).count())
            .unwrap_or(0)
    }
}

pub const CABA: &str = "Ciudad Autónoma de Buenos Aires";

pub fn result_in(region: &str, lat: f64, lng: f64) -> GeocodeResult {
    GeocodeResult {
        address_components: vec![AddressComponent {
            long_name: region.to_string(),
            short_name: String::new(),
            types: vec!["administrative_area_level_1".to_string()],
        }],
        formatted_address: format!("Dirección de prueba, {}", region),
        geometry: Geometry {
            location: LatLng { lat, lng },
        },
    }
}

/// Geocodificador con respuestas fijas
pub struct StubGeocoder {
    pub results: Vec<GeocodeResult>,
    pub fail: bool,
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, _address: &str) -> Result<Vec<GeocodeResult>> {
        if self.fail {
            return Err(anyhow!("timeout"));
        }
        Ok(self.results.clone())
    }

    async fn reverse_geocode(&self, _lat: f64, _lng: f64) -> Result<Vec<GeocodeResult>> {
        if self.fail {
            return Err(anyhow!("timeout"));
        }
        Ok(self.results.clone())
    }
}

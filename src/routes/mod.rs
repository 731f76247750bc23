pub mod bicycle_routes;
pub mod geocoding_routes;
pub mod station_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Crear el router de la API (montado bajo `/api`)
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/estaciones", station_routes::create_station_router())
        .nest("/bicicletas", bicycle_routes::create_bicycle_router())
        .nest("/geocoding", geocoding_routes::create_geocoding_router())
}

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Endpoint de salud simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "bike-inventory",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

//! Inventario de bicicletas públicas
//!
//! API REST sobre dos colecciones JSON (estaciones y bicicletas) y el
//! validador de direcciones que usa el mapa.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_layer_for;
use state::AppState;

/// Router completo: API, salud, archivos estáticos de la UI y middleware
pub fn build_app(state: AppState) -> Router {
    let cors = cors_layer_for(&state.config.cors_origins);
    let public_dir = state.config.public_dir.clone();

    let mut app = Router::new()
        .merge(routes::create_health_router())
        .nest("/api", routes::create_api_router());

    if public_dir.is_dir() {
        app = app.fallback_service(ServeDir::new(public_dir));
    } else {
        tracing::debug!("📁 {} no existe, no se sirve la UI", public_dir.display());
    }

    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

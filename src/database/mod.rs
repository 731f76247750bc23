//! Módulo de persistencia
//!
//! Maneja los archivos JSON de estaciones y bicicletas.

pub mod json_store;
pub mod seed;

pub use json_store::{JsonStore, StoreError};

pub const STATIONS_FILE: &str = "estaciones.json";
pub const BICYCLES_FILE: &str = "bicicletas.json";

//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables son
//! opcionales y tienen un valor por defecto; un valor mal formado es un error.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

use crate::services::geocoding_service::DEFAULT_GEOCODING_URL;

pub const DEFAULT_TARGET_CITY: &str = "Ciudad Autónoma de Buenos Aires";
pub const DEFAULT_REGION_SUFFIX: &str = ", CABA, Argentina";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a valid number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("LOG_LEVEL must be one of trace/debug/info/warn/error, got '{0}'")]
    InvalidLogLevel(String),
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
    pub cors_origins: Vec<String>,
    pub log_level: Level,
    pub google_maps_api_key: Option<String>,
    pub geocoding_base_url: String,
    pub geocoding_target_city: String,
    pub geocoding_region_suffix: String,
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración con una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = var("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { var: "PORT", value })?,
            None => 3001,
        };

        let log_level = match var("LOG_LEVEL") {
            Some(value) => Level::from_str(value.trim()).map_err(|_| ConfigError::InvalidLogLevel(value))?,
            None if environment == "development" => Level::DEBUG,
            None => Level::INFO,
        };

        Ok(Self {
            port,
            log_level,
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            data_dir: var("DATA_DIR").unwrap_or_else(|| "data".to_string()).into(),
            public_dir: var("PUBLIC_DIR").unwrap_or_else(|| "public".to_string()).into(),
            cors_origins: var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            google_maps_api_key: var("GOOGLE_MAPS_API_KEY"),
            geocoding_base_url: var("GEOCODING_BASE_URL").unwrap_or_else(|| DEFAULT_GEOCODING_URL.to_string()),
            geocoding_target_city: var("GEOCODING_TARGET_CITY").unwrap_or_else(|| DEFAULT_TARGET_CITY.to_string()),
            // El sufijo puede ser vacío a propósito, por eso no pasa por `var`.
            geocoding_region_suffix: lookup("GEOCODING_REGION_SUFFIX")
                .unwrap_or_else(|| DEFAULT_REGION_SUFFIX.to_string()),
            environment,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

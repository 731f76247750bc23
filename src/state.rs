//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. No hay datos en memoria: cada request relee
//! los archivos a través del `JsonStore`.

use anyhow::Result;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::database::JsonStore;
use crate::services::address_validation::AddressValidator;
use crate::services::geocoding_service::{Geocoder, GeocodingService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub store: JsonStore,
    pub address_validator: Arc<AddressValidator>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, store: JsonStore, geocoder: Option<Arc<dyn Geocoder>>) -> Self {
        let address_validator = AddressValidator::new(
            geocoder,
            config.geocoding_target_city.clone(),
            config.geocoding_region_suffix.clone(),
        );

        Self {
            config: Arc::new(config),
            store,
            address_validator: Arc::new(address_validator),
        }
    }

    /// Estado de producción: el geocodificador de Google solo se crea si hay
    /// API key configurada.
    pub fn from_config(config: EnvironmentConfig) -> Result<Self> {
        let store = JsonStore::new(config.data_dir.clone());

        let geocoder: Option<Arc<dyn Geocoder>> = match &config.google_maps_api_key {
            Some(key) => {
                let service = GeocodingService::new(key.clone(), config.geocoding_base_url.clone())?;
                Some(Arc::new(service) as Arc<dyn Geocoder>)
            }
            None => {
                log::warn!("⚠️ GOOGLE_MAPS_API_KEY no configurada: las direcciones se aceptan sin validar");
                None
            }
        };

        Ok(Self::new(config, store, geocoder))
    }
}

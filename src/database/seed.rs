//! Datos iniciales
//!
//! Al arrancar, cada colección que no tenga archivo se crea con un conjunto
//! fijo de 3 estaciones y 14 bicicletas. Los archivos existentes no se tocan.

use super::json_store::{JsonStore, StoreError};
use super::{BICYCLES_FILE, STATIONS_FILE};

pub const SEED_STATIONS: &str = include_str!("../../seed/estaciones.json");
pub const SEED_BICYCLES: &str = include_str!("../../seed/bicicletas.json");

/// Inicializar los archivos de datos que falten
pub async fn initialize_data(store: &JsonStore) -> Result<(), StoreError> {
    for (file_name, contents) in [(STATIONS_FILE, SEED_STATIONS), (BICYCLES_FILE, SEED_BICYCLES)] {
        if store.initialize_if_missing(file_name, contents).await? {
            log::info!(
                "🌱 {} inicializado con datos de ejemplo",
                store.path_for(file_name).display()
            );
        } else {
            log::debug!("📂 {} ya existe, se conserva", store.path_for(file_name).display());
        }
    }
    Ok(())
}

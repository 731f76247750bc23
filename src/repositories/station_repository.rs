use crate::database::{JsonStore, StoreError, STATIONS_FILE};
use crate::models::{Station, StationsDocument};
use serde::Serialize;

#[derive(Serialize)]
struct StationsDocumentRef<'a> {
    estaciones: &'a [Station],
}

pub struct StationRepository {
    store: JsonStore,
}

impl StationRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Station>, StoreError> {
        let document: StationsDocument = self.store.load(STATIONS_FILE).await?;
        Ok(document.estaciones)
    }

    pub async fn save_all(&self, stations: &[Station]) -> Result<(), StoreError> {
        log::debug!("💾 Guardando {} estaciones", stations.len());
        self.store
            .save(STATIONS_FILE, &StationsDocumentRef { estaciones: stations })
            .await
    }
}

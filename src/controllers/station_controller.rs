use chrono::Utc;
use serde_json::{Map, Value};
use validator::Validate;

use crate::database::JsonStore;
use crate::dto::station_dto::CreateStationRequest;
use crate::models::Station;
use crate::repositories::station_repository::StationRepository;
use crate::utils::errors::{not_found_error, storage_error, AppError, AppResult};
use crate::utils::merge::shallow_merge;

const STATION_NOT_FOUND: &str = "Estación no encontrada";

/// Id derivado de la hora actual (milisegundos), avanzado hasta ser único
pub fn next_station_id(stations: &[Station], now_millis: i64) -> String {
    let mut candidate = now_millis;
    loop {
        let id = candidate.to_string();
        if !stations.iter().any(|s| s.id == id) {
            return id;
        }
        candidate += 1;
    }
}

pub struct StationController {
    repository: StationRepository,
}

impl StationController {
    pub fn new(store: JsonStore) -> Self {
        Self {
            repository: StationRepository::new(store),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Station>> {
        self.repository
            .find_all()
            .await
            .map_err(storage_error("Error al leer las estaciones"))
    }

    pub async fn create(&self, request: CreateStationRequest) -> AppResult<Station> {
        request.validate()?;

        let mut stations = self
            .repository
            .find_all()
            .await
            .map_err(storage_error("Error al crear la estación"))?;

        let station = Station {
            id: next_station_id(&stations, Utc::now().timestamp_millis()),
            name: request.name,
            address: request.address,
            lat: Some(request.lat),
            lng: Some(request.lng),
            capacity: request.capacity.unwrap_or(0),
            active: request.active.unwrap_or(true),
            bicycle_ids: Vec::new(),
            available_bicycles: Some(request.available_bicycles.unwrap_or(0)),
            extra: Map::new(),
        };

        stations.push(station.clone());
        self.repository
            .save_all(&stations)
            .await
            .map_err(storage_error("Error al crear la estación"))?;

        log::info!("✅ Estación creada: {} ({})", station.id, station.name);
        Ok(station)
    }

    pub async fn update(&self, id: &str, patch: Map<String, Value>) -> AppResult<Station> {
        let mut stations = self
            .repository
            .find_all()
            .await
            .map_err(storage_error("Error al actualizar la estación"))?;

        let index = stations
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found_error(STATION_NOT_FOUND))?;

        let merged = shallow_merge(&stations[index], id, patch)
            .map_err(|e| AppError::BadRequest(format!("Datos de estación inválidos: {}", e)))?;
        stations[index] = merged.clone();

        self.repository
            .save_all(&stations)
            .await
            .map_err(storage_error("Error al actualizar la estación"))?;

        log::info!("✏️ Estación actualizada: {}", id);
        Ok(merged)
    }

    /// Eliminar una estación. Las bicicletas que la referencian no se tocan.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut stations = self
            .repository
            .find_all()
            .await
            .map_err(storage_error("Error al eliminar la estación"))?;

        let index = stations
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found_error(STATION_NOT_FOUND))?;

        let removed = stations.remove(index);
        self.repository
            .save_all(&stations)
            .await
            .map_err(storage_error("Error al eliminar la estación"))?;

        if !removed.bicycle_ids.is_empty() {
            log::warn!(
                "⚠️ Estación {} eliminada con {} bicicletas asignadas",
                id,
                removed.bicycle_ids.len()
            );
        }
        Ok(())
    }
}

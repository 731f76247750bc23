use chrono::{NaiveDate, Utc};
use serde_json::{Map, Value};
use validator::Validate;

use crate::database::JsonStore;
use crate::dto::bicycle_dto::{non_empty, AddRepairRequest, CreateBicycleRequest, MoveBicycleRequest};
use crate::models::{Bicycle, Repair, UNSPECIFIED_MECHANIC};
use crate::repositories::bicycle_repository::BicycleRepository;
use crate::repositories::station_repository::StationRepository;
use crate::services::relocation::relocate;
use crate::utils::errors::{not_found_error, storage_error, AppError, AppResult};
use crate::utils::merge::shallow_merge;

const BICYCLE_NOT_FOUND: &str = "Bicicleta no encontrada";

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Id `B###` a partir de la cantidad actual, avanzado hasta ser único
pub fn next_bicycle_id(bicycles: &[Bicycle]) -> String {
    let mut number = bicycles.len() + 1;
    loop {
        let id = format!("B{:03}", number);
        if !bicycles.iter().any(|b| b.id == id) {
            return id;
        }
        number += 1;
    }
}

pub struct BicycleController {
    repository: BicycleRepository,
    stations: StationRepository,
}

impl BicycleController {
    pub fn new(store: JsonStore) -> Self {
        Self {
            repository: BicycleRepository::new(store.clone()),
            stations: StationRepository::new(store),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Bicycle>> {
        self.repository
            .find_all()
            .await
            .map_err(storage_error("Error al leer las bicicletas"))
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Bicycle> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(storage_error("Error al leer la bicicleta"))?
            .ok_or_else(|| not_found_error(BICYCLE_NOT_FOUND))
    }

    pub async fn create(&self, request: CreateBicycleRequest) -> AppResult<Bicycle> {
        request.validate()?;

        let mut bicycles = self
            .repository
            .find_all()
            .await
            .map_err(storage_error("Error al crear la bicicleta"))?;

        let id = match non_empty(request.id) {
            Some(id) if bicycles.iter().any(|b| b.id == id) => {
                return Err(AppError::Conflict(format!("Ya existe una bicicleta con id '{}'", id)));
            }
            Some(id) => id,
            None => next_bicycle_id(&bicycles),
        };

        let bicycle = Bicycle {
            id,
            serial_number: request.serial_number,
            status: request.status.unwrap_or_default(),
            current_station_id: non_empty(request.current_station_id),
            acquired_on: request.acquired_on.unwrap_or_else(today),
            repairs: request.repairs.unwrap_or_default(),
            distance_km: request.distance_km.unwrap_or(0.0),
            last_maintenance: request.last_maintenance.unwrap_or_else(today),
            extra: Map::new(),
        };

        bicycles.push(bicycle.clone());
        self.repository
            .save_all(&bicycles)
            .await
            .map_err(storage_error("Error al crear la bicicleta"))?;

        log::info!("✅ Bicicleta creada: {}", bicycle.id);
        Ok(bicycle)
    }

    pub async fn update(&self, id: &str, patch: Map<String, Value>) -> AppResult<Bicycle> {
        let mut bicycles = self
            .repository
            .find_all()
            .await
            .map_err(storage_error("Error al actualizar la bicicleta"))?;

        let index = bicycles
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| not_found_error(BICYCLE_NOT_FOUND))?;

        let mut merged = shallow_merge(&bicycles[index], id, patch)
            .map_err(|e| AppError::BadRequest(format!("Datos de bicicleta inválidos: {}", e)))?;
        merged.current_station_id = non_empty(merged.current_station_id);
        bicycles[index] = merged.clone();

        self.repository
            .save_all(&bicycles)
            .await
            .map_err(storage_error("Error al actualizar la bicicleta"))?;

        log::info!("✏️ Bicicleta actualizada: {}", id);
        Ok(merged)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut bicycles = self
            .repository
            .find_all()
            .await
            .map_err(storage_error("Error al eliminar la bicicleta"))?;

        let index = bicycles
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| not_found_error(BICYCLE_NOT_FOUND))?;

        bicycles.remove(index);
        self.repository
            .save_all(&bicycles)
            .await
            .map_err(storage_error("Error al eliminar la bicicleta"))?;

        log::info!("🗑️ Bicicleta eliminada: {}", id);
        Ok(())
    }

    pub async fn add_repair(&self, id: &str, request: AddRepairRequest) -> AppResult<Bicycle> {
        request.validate()?;

        let mut bicycles = self
            .repository
            .find_all()
            .await
            .map_err(storage_error("Error al agregar el arreglo"))?;

        let bicycle = bicycles
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| not_found_error(BICYCLE_NOT_FOUND))?;

        bicycle.add_repair(Repair {
            date: request.date.unwrap_or_else(today),
            description: request.description,
            cost: request.cost.unwrap_or(0),
            mechanic: non_empty(request.mechanic).unwrap_or_else(|| UNSPECIFIED_MECHANIC.to_string()),
        });
        let updated = bicycle.clone();

        self.repository
            .save_all(&bicycles)
            .await
            .map_err(storage_error("Error al agregar el arreglo"))?;

        log::info!("🔧 Arreglo registrado para {} ({} en total)", id, updated.repairs.len());
        Ok(updated)
    }

    /// Reubicar una bicicleta y actualizar ambas colecciones.
    ///
    /// Se escriben primero las bicicletas y después las estaciones; si la
    /// segunda escritura falla, los archivos quedan inconsistentes.
    pub async fn move_to(&self, id: &str, request: MoveBicycleRequest) -> AppResult<Bicycle> {
        const MOVE_ERROR: &str = "Error al mover la bicicleta";

        let mut bicycles = self.repository.find_all().await.map_err(storage_error(MOVE_ERROR))?;
        let mut stations = self.stations.find_all().await.map_err(storage_error(MOVE_ERROR))?;

        let target = non_empty(request.station_id);
        let index = relocate(&mut bicycles, &mut stations, id, target.as_deref())
            .map_err(|e| AppError::NotFound(e.to_string()))?;

        self.repository
            .save_all(&bicycles)
            .await
            .map_err(storage_error(MOVE_ERROR))?;
        self.stations
            .save_all(&stations)
            .await
            .map_err(storage_error(MOVE_ERROR))?;

        Ok(bicycles.swap_remove(index))
    }
}

//! Reubicación de bicicletas
//!
//! `Bicycle::current_station_id` y `Station::bicycle_ids` son las dos mitades
//! de un mismo vínculo. Esta es la única operación que modifica ambas.

use thiserror::Error;

use crate::models::{Bicycle, Station};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RelocationError {
    #[error("Bicicleta no encontrada")]
    BicycleNotFound,

    #[error("Estación no encontrada")]
    StationNotFound,
}

/// Mover una bicicleta a `target` (o dejarla en tránsito con `None`).
///
/// Sobre las copias en memoria de ambas colecciones:
/// 1. falla si la bicicleta no existe, o si `target` no existe;
/// 2. quita la bicicleta de la estación anterior (si ya no existe, se omite)
///    y de cualquier otra lista que todavía la mencione;
/// 3. la agrega una sola vez a la estación destino;
/// 4. actualiza `current_station_id`.
///
/// Devuelve el índice de la bicicleta dentro de `bicycles`. Si falla, no se
/// modificó nada.
pub fn relocate(
    bicycles: &mut [Bicycle],
    stations: &mut [Station],
    bicycle_id: &str,
    target: Option<&str>,
) -> Result<usize, RelocationError> {
    let bicycle_index = bicycles
        .iter()
        .position(|b| b.id == bicycle_id)
        .ok_or(RelocationError::BicycleNotFound)?;

    let target_index = match target {
        Some(station_id) => Some(
            stations
                .iter()
                .position(|s| s.id == station_id)
                .ok_or(RelocationError::StationNotFound)?,
        ),
        None => None,
    };

    let bicycle = &mut bicycles[bicycle_index];
    let previous = bicycle.current_station_id.take();

    if let Some(previous_id) = previous.as_deref() {
        match stations.iter_mut().find(|s| s.id == previous_id) {
            Some(station) => station.release(bicycle_id),
            None => log::warn!("⚠️ Estación anterior '{}' de {} ya no existe", previous_id, bicycle_id),
        }
    }

    for station in stations.iter_mut().filter(|s| s.holds(bicycle_id)) {
        log::warn!(
            "🔧 {} figuraba también en la estación '{}', se corrige",
            bicycle_id,
            station.id
        );
        station.release(bicycle_id);
    }

    if let Some(index) = target_index {
        stations[index].dock(bicycle_id);
        bicycle.current_station_id = Some(stations[index].id.clone());
    }

    log::info!(
        "🚲 {} movida: {:?} -> {:?}",
        bicycle_id,
        previous,
        bicycle.current_station_id
    );

    Ok(bicycle_index)
}

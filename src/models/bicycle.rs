//! Modelo de Bicycle
//!
//! Este módulo contiene la bicicleta, su estado y el historial de arreglos.
//! Mapea exactamente al formato de `bicicletas.json`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::nullable::{null_as_default, null_as_unspecified_mechanic, whole_as_integer};

/// Mecánico asignado cuando el arreglo no lo especifica
pub const UNSPECIFIED_MECHANIC: &str = "Sin especificar";

/// Estado operativo de la bicicleta
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BicycleStatus {
    #[default]
    #[serde(rename = "en_circulacion")]
    InCirculation,
    #[serde(rename = "parada")]
    Stopped,
    #[serde(rename = "en_mecanico")]
    InRepair,
}

/// Arreglo registrado en el historial de una bicicleta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repair {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "descripcion", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "costo", default, deserialize_with = "null_as_default")]
    pub cost: u64,
    #[serde(
        rename = "mecanico",
        default = "default_mechanic",
        deserialize_with = "null_as_unspecified_mechanic"
    )]
    pub mechanic: String,
}

fn default_mechanic() -> String {
    UNSPECIFIED_MECHANIC.to_string()
}

/// Bicicleta tal como se persiste en `bicicletas.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bicycle {
    pub id: String,
    #[serde(rename = "numero", default, deserialize_with = "null_as_default")]
    pub serial_number: String,
    #[serde(rename = "estado", default, deserialize_with = "null_as_default")]
    pub status: BicycleStatus,
    /// `None` significa en tránsito / sin estación.
    #[serde(rename = "estacionActual", default)]
    pub current_station_id: Option<String>,
    #[serde(rename = "fechaAdquisicion")]
    pub acquired_on: NaiveDate,
    #[serde(rename = "historialArreglos", default, deserialize_with = "null_as_default")]
    pub repairs: Vec<Repair>,
    /// Los valores enteros se escriben sin decimales.
    #[serde(
        rename = "kilometrosRecorridos",
        default,
        deserialize_with = "null_as_default",
        serialize_with = "whole_as_integer"
    )]
    pub distance_km: f64,
    #[serde(rename = "ultimoMantenimiento")]
    pub last_maintenance: NaiveDate,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Bicycle {
    pub fn add_repair(&mut self, repair: Repair) {
        self.last_maintenance = repair.date;
        self.repairs.push(repair);
    }
}

/// Documento completo de `bicicletas.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BicyclesDocument {
    pub bicicletas: Vec<Bicycle>,
}

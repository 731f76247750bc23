use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::models::{BicycleStatus, Repair};

/// La UI envía `""` en los campos de fecha que el usuario deja vacíos.
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Normalizar cadenas vacías a `None`
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// Request para crear una bicicleta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBicycleRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "numero")]
    #[validate(length(min = 1, message = "El número de serie es requerido"))]
    pub serial_number: String,
    #[serde(rename = "estado", default)]
    pub status: Option<BicycleStatus>,
    #[serde(rename = "estacionActual", default)]
    pub current_station_id: Option<String>,
    #[serde(rename = "fechaAdquisicion", default, deserialize_with = "empty_date_as_none")]
    pub acquired_on: Option<NaiveDate>,
    #[serde(rename = "historialArreglos", default)]
    pub repairs: Option<Vec<Repair>>,
    #[serde(rename = "kilometrosRecorridos", default)]
    #[validate(range(min = 0.0))]
    pub distance_km: Option<f64>,
    #[serde(rename = "ultimoMantenimiento", default, deserialize_with = "empty_date_as_none")]
    pub last_maintenance: Option<NaiveDate>,
}

// Request para registrar un arreglo
#[derive(Debug, Deserialize, Validate)]
pub struct AddRepairRequest {
    #[serde(rename = "fecha", default, deserialize_with = "empty_date_as_none")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "descripcion")]
    #[validate(length(min = 1, message = "La descripción es requerida"))]
    pub description: String,
    #[serde(rename = "costo", default)]
    pub cost: Option<u64>,
    #[serde(rename = "mecanico", default)]
    pub mechanic: Option<String>,
}

// Request para mover una bicicleta; sin estación = en tránsito
#[derive(Debug, Default, Deserialize)]
pub struct MoveBicycleRequest {
    #[serde(rename = "estacionId", default)]
    pub station_id: Option<String>,
}

//! Modelo de Station
//!
//! Una estación es un punto de anclaje físico con capacidad fija. Los nombres
//! de campo en JSON son los del archivo `estaciones.json` y los que usa la UI.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::nullable::{null_as_default, null_as_true};

fn default_active() -> bool {
    true
}

/// Estación tal como se persiste en `estaciones.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "direccion", default, deserialize_with = "null_as_default")]
    pub address: String,
    /// `None` en registros viejos guardados sin coordenadas; se reescribe `null`.
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(rename = "capacidad", default, deserialize_with = "null_as_default")]
    pub capacity: u32,
    #[serde(rename = "activa", default = "default_active", deserialize_with = "null_as_true")]
    pub active: bool,
    /// Bicicletas ancladas; contraparte de `Bicycle::current_station_id`.
    #[serde(rename = "bicicletasIds", default, deserialize_with = "null_as_default")]
    pub bicycle_ids: Vec<String>,
    #[serde(
        rename = "bicicletasDisponibles",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub available_bicycles: Option<u32>,
    /// Campos adicionales enviados por el cliente; se conservan tal cual.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Station {
    pub fn holds(&self, bicycle_id: &str) -> bool {
        self.bicycle_ids.iter().any(|id| id == bicycle_id)
    }

    /// Quitar todas las apariciones de una bicicleta de la lista
    pub fn release(&mut self, bicycle_id: &str) {
        self.bicycle_ids.retain(|id| id != bicycle_id);
    }

    /// Anclar una bicicleta; la lista nunca la contiene dos veces
    pub fn dock(&mut self, bicycle_id: &str) {
        self.release(bicycle_id);
        self.bicycle_ids.push(bicycle_id.to_string());
    }
}

/// Documento completo de `estaciones.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationsDocument {
    pub estaciones: Vec<Station>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_unknown_fields() {
        let station: Station = serde_json::from_value(json!({
            "id": "1",
            "nombre": "Estación Plaza de Mayo",
            "direccion": "Av. de Mayo 500",
            "lat": -34.6084,
            "lng": -58.3731,
            "capacidad": 20,
            "bicicletasIds": ["B001"],
            "horario": "24h"
        }))
        .unwrap();

        assert!(station.active);
        assert_eq!(station.available_bicycles, None);
        assert_eq!(station.extra["horario"], "24h");

        let back = serde_json::to_value(&station).unwrap();
        assert_eq!(back["horario"], "24h");
        assert_eq!(back["bicicletasIds"], json!(["B001"]));
        assert!(back.get("bicicletasDisponibles").is_none());
    }

    #[test]
    fn test_dock_never_duplicates() {
        let mut station: Station = serde_json::from_value(json!({
            "id": "2", "lat": 0.0, "lng": 0.0, "bicicletasIds": ["B006", "B007"]
        }))
        .unwrap();

        station.dock("B006");
        station.dock("B006");

        assert_eq!(station.bicycle_ids, vec!["B007", "B006"]);
        station.release("B006");
        assert!(!station.holds("B006"));
    }

    #[test]
    fn test_null_fields_from_blank_form_inputs() {
        let station: Station = serde_json::from_value(json!({
            "id": "1712345678901",
            "nombre": "Retiro",
            "direccion": null,
            "lat": null,
            "lng": null,
            "capacidad": null,
            "activa": null,
            "bicicletasDisponibles": null
        }))
        .unwrap();

        assert_eq!(station.lat, None);
        assert_eq!(station.capacity, 0);
        assert!(station.active);
        assert_eq!(station.address, "");
        assert!(station.bicycle_ids.is_empty());

        let back = serde_json::to_value(&station).unwrap();
        assert!(back["lat"].is_null());
        assert_eq!(back["capacidad"], 0);
    }
}

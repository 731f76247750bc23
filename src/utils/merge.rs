//! Mezcla superficial de registros
//!
//! Un PUT parcial sobrescribe las claves de primer nivel presentes en el
//! cuerpo y conserva el resto. El campo `id` nunca cambia.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// Aplicar `patch` sobre `record`, forzando `id`.
///
/// Falla si el resultado no respeta los tipos del registro (por ejemplo
/// `"capacidad": "muchas"`).
pub fn shallow_merge<T>(record: &T, id: &str, patch: Map<String, Value>) -> Result<T, serde_json::Error>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = match serde_json::to_value(record)? {
        Value::Object(fields) => fields,
        other => return serde_json::from_value(other),
    };

    merged.extend(patch);
    merged.insert("id".to_string(), Value::String(id.to_string()));

    serde_json::from_value(Value::Object(merged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Station;
    use serde_json::json;

    fn station() -> Station {
        serde_json::from_value(json!({
            "id": "1",
            "nombre": "Estación Plaza de Mayo",
            "direccion": "Av. de Mayo 500",
            "lat": -34.6084,
            "lng": -58.3731,
            "capacidad": 20,
            "activa": true,
            "bicicletasIds": ["B001"]
        }))
        .unwrap()
    }

    fn patch(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_merge_overwrites_only_given_keys() {
        let merged = shallow_merge(&station(), "1", patch(json!({ "capacidad": 30, "activa": false }))).unwrap();

        assert_eq!(merged.capacity, 30);
        assert!(!merged.active);
        assert_eq!(merged.name, "Estación Plaza de Mayo");
        assert_eq!(merged.bicycle_ids, vec!["B001"]);
    }

    #[test]
    fn test_merge_never_changes_id() {
        let merged = shallow_merge(&station(), "1", patch(json!({ "id": "999", "nombre": "Otra" }))).unwrap();

        assert_eq!(merged.id, "1");
        assert_eq!(merged.name, "Otra");
    }

    #[test]
    fn test_merge_keeps_extra_fields() {
        let merged = shallow_merge(&station(), "1", patch(json!({ "horario": "7-22" }))).unwrap();

        assert_eq!(merged.extra["horario"], "7-22");
    }

    #[test]
    fn test_merge_rejects_wrong_types() {
        let result = shallow_merge(&station(), "1", patch(json!({ "capacidad": "muchas" })));

        assert!(result.is_err());
    }
}

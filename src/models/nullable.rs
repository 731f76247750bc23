//! Campos tolerantes a `null`
//!
//! Los archivos pueden contener `null` donde la UI envió un número vacío
//! (`parseInt('')` se serializa como `null`). `#[serde(default)]` solo cubre
//! la clave ausente; estos helpers cubren también el valor nulo.

use serde::{Deserialize, Deserializer, Serializer};

use super::bicycle::UNSPECIFIED_MECHANIC;

/// `null` o ausente → `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

pub fn null_as_unspecified_mechanic<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNSPECIFIED_MECHANIC.to_string()))
}

/// Escribir `1250.0` como `1250` para no cambiar el formato del archivo
pub fn whole_as_integer<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

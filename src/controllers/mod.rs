//! Controllers
//!
//! Reglas de negocio de cada recurso: asignación de ids, valores por defecto,
//! mezcla de PUT parciales y la reubicación de bicicletas.

pub mod bicycle_controller;
pub mod station_controller;

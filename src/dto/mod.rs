//! DTOs de la API
//!
//! Cuerpos de request/response que no coinciden con los modelos persistidos.

pub mod bicycle_dto;
pub mod geocoding_dto;
pub mod station_dto;

//! Services module
//!
//! Este módulo contiene la lógica de negocio que no depende de HTTP:
//! la reubicación de bicicletas y la geocodificación de direcciones.

pub mod address_validation;
pub mod geocoding_service;
pub mod relocation;

pub use address_validation::AddressValidator;
pub use geocoding_service::{Geocoder, GeocodingService};
pub use relocation::{relocate, RelocationError};

//! Repositorios
//!
//! Lectura y escritura tipada de cada colección. Cada llamada relee o
//! reescribe el archivo completo.

pub mod bicycle_repository;
pub mod station_repository;

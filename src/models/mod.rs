//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al formato de los archivos JSON persistidos.

pub mod bicycle;
mod nullable;
pub mod station;

pub use bicycle::*;
pub use station::*;

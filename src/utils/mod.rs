//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y la mezcla
//! superficial de registros en los PUT parciales.

pub mod errors;
pub mod merge;

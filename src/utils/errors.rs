//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores de la API
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::database::StoreError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Cuerpo que no es JSON o no respeta los tipos del request.
    #[error("Invalid body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Falla de lectura/escritura de archivos; `message` es lo que ve el cliente.
    #[error("{message}: {source}")]
    Storage {
        message: String,
        #[source]
        source: StoreError,
    },

    #[error("External API error: {0}")]
    ExternalApi(String),
}

/// Respuesta de error para la API. `error` es el mensaje que muestra la UI.
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Los datos enviados no son válidos".to_string(),
                        code: "VALIDATION_ERROR",
                        details: Some(json!(e)),
                    },
                )
            }

            AppError::NotFound(msg) => {
                tracing::warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: msg,
                        code: "NOT_FOUND",
                        details: None,
                    },
                )
            }

            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: msg,
                        code: "CONFLICT",
                        details: None,
                    },
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: msg,
                        code: "BAD_REQUEST",
                        details: None,
                    },
                )
            }

            AppError::InvalidBody(rejection) => {
                let reason = rejection.body_text();
                tracing::warn!("Invalid body ({}): {}", rejection.status(), reason);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: format!("Cuerpo de la solicitud inválido: {}", reason),
                        code: "BAD_REQUEST",
                        details: None,
                    },
                )
            }

            AppError::Storage { message, source } => {
                tracing::error!("Storage error: {}: {}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: message,
                        code: "STORAGE_ERROR",
                        details: None,
                    },
                )
            }

            AppError::ExternalApi(msg) => {
                tracing::error!("External API error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: "Error al comunicarse con el servicio de geocodificación".to_string(),
                        code: "EXTERNAL_API_ERROR",
                        details: Some(json!({ "external_api_error": msg })),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Adaptador para `map_err`: envuelve un `StoreError` con el mensaje genérico
/// de la operación.
pub fn storage_error(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |source| AppError::Storage {
        message: message.to_string(),
        source,
    }
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

//! Almacenamiento en archivos JSON
//!
//! Cada colección vive en un único archivo `<data_dir>/<nombre>.json` que se
//! lee y se escribe completo en cada operación. No hay bloqueo: dos escrituras
//! concurrentes sobre el mismo archivo se resuelven con "gana el último".

use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Errores del almacenamiento en archivos
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Acceso a los documentos JSON de un directorio de datos
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Leer y parsear un documento completo
    pub async fn load<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, StoreError> {
        let path = self.path_for(file_name);
        let raw = fs::read(&path).await.map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_slice(&raw).map_err(|source| StoreError::Json { path, source })
    }

    /// Reescribir un documento completo (JSON indentado con 2 espacios)
    pub async fn save<T: Serialize>(&self, file_name: &str, document: &T) -> Result<(), StoreError> {
        let path = self.path_for(file_name);
        let body = serde_json::to_vec_pretty(document).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;

        fs::write(&path, body)
            .await
            .map_err(|source| StoreError::Io { path, source })
    }

    /// Crear el archivo con `contents` solo si todavía no existe.
    ///
    /// Devuelve `true` si el archivo fue creado. Un archivo existente nunca se
    /// sobrescribe.
    pub async fn initialize_if_missing(
        &self,
        file_name: &str,
        contents: &str,
    ) -> Result<bool, StoreError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StoreError::Io {
                path: self.data_dir.clone(),
                source,
            })?;

        let path = self.path_for(file_name);
        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        file.write_all(contents.as_bytes())
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        file.flush()
            .await
            .map_err(|source| StoreError::Io { path, source })?;

        Ok(true)
    }
}

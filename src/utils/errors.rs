//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la capa de persistencia y de la API,
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// SQLSTATE de PostgreSQL para `foreign_key_violation`
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Mensaje genérico para cualquier fallo interno
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "internal server error";

/// Errores de la capa de storage
#[derive(Error, Debug)]
pub enum StorageError {
    /// `vehicle_id` no referencia ningún vehículo existente
    #[error("referenced vehicle does not exist: {0}")]
    InvalidReference(String),

    #[error("no such record")]
    NotFound,

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return StorageError::NotFound;
        }
        if is_foreign_key_violation(&err) {
            return StorageError::InvalidReference(err.to_string());
        }
        StorageError::Database(err)
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION),
        _ => false,
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidReference(_) => {
                AppError::InvalidReference("vehicle_id does not exist".to_string())
            }
            StorageError::NotFound => AppError::NotFound("driver not found".to_string()),
            other => AppError::Storage(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Respuesta de error para la API
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) | AppError::InvalidReference(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // El detalle completo solo va al log; el cliente recibe un mensaje acotado
        let message = match self {
            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                e.to_string()
            }
            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                msg
            }
            AppError::InvalidReference(msg) => {
                warn!("⚠️ Invalid reference: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                warn!("🔍 Resource not found: {}", msg);
                msg
            }
            AppError::Storage(e) => {
                error!("❌ Storage error: {:?}", e);
                INTERNAL_SERVER_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

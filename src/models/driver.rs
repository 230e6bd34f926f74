//! Modelo de Driver
//!
//! Este módulo contiene el struct Driver, la vista compuesta FullDriver y
//! los cuerpos de request/response del alta de conductores.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError, ValidationErrors};

use super::vehicle::Vehicle;

/// Driver persistido - mapea exactamente a la tabla drivers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub vehicle_id: i64,
    pub score: i32,
}

/// Driver con el vehículo embebido en lugar de `vehicle_id`.
/// Solo se produce por el lookup con JOIN, nunca se persiste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullDriver {
    pub id: i64,
    pub name: String,
    pub vehicle: Vehicle,
    pub score: i32,
}

/// Fila plana del `INNER JOIN drivers/vehicles`
#[derive(Debug, FromRow)]
pub struct FullDriverRow {
    pub id: i64,
    pub name: String,
    pub score: i32,
    pub vehicle_id: i64,
    pub vehicle_type: String,
    pub vehicle_vendor: String,
    pub vehicle_model: String,
}

impl From<FullDriverRow> for FullDriver {
    fn from(row: FullDriverRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            vehicle: Vehicle {
                id: row.vehicle_id,
                vehicle_type: row.vehicle_type,
                vendor: row.vehicle_vendor,
                model: row.vehicle_model,
            },
            score: row.score,
        }
    }
}

/// Datos validados para insertar un driver. El `id` lo asigna la base de datos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDriver {
    pub name: String,
    pub vehicle_id: i64,
    pub score: i32,
}

/// Request para crear un nuevo driver
///
/// Todos los campos son `Option` para distinguir "ausente" de "cero":
/// `score = 0` es válido, pero el campo tiene que venir.
#[derive(Debug, Deserialize, Validate)]
pub struct AddDriverRequest {
    #[validate(
        required(message = "name is required"),
        custom(function = "validate_not_blank", message = "name must not be empty")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "vehicle_id is required"),
        range(min = 1, message = "vehicle_id must be a positive integer")
    )]
    pub vehicle_id: Option<i64>,

    #[validate(required(message = "score is required"))]
    pub score: Option<i32>,
}

impl AddDriverRequest {
    /// Valida el request y lo convierte en un `NewDriver` listo para persistir
    pub fn into_new_driver(self) -> Result<NewDriver, ValidationErrors> {
        self.validate()?;

        Ok(NewDriver {
            name: self.name.ok_or_else(|| missing_field("name"))?,
            vehicle_id: self.vehicle_id.ok_or_else(|| missing_field("vehicle_id"))?,
            score: self.score.ok_or_else(|| missing_field("score"))?,
        })
    }
}

/// Error de campo requerido con el nombre del campo en el mensaje
fn missing_field(field: &'static str) -> ValidationErrors {
    let mut error = ValidationError::new("required");
    error.message = Some(Cow::Owned(format!("{} is required", field)));

    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Response del alta: solo el identificador generado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AddDriverResponse {
    pub id: i64,
}

//! Modelo de Vehicle
//! 
//! Vehículos de solo lectura: este servicio nunca los crea ni los modifica,
//! solo los referencia desde `drivers.vehicle_id` y los embebe en `FullDriver`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle - mapea a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub vehicle_type: String,
    pub vendor: String,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vehicle_type_serializes_as_type() {
        let vehicle = Vehicle {
            id: 7,
            vehicle_type: "sedan".to_string(),
            vendor: "Toyota".to_string(),
            model: "Camry".to_string(),
        };

        let value = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(
            value,
            json!({ "id": 7, "type": "sedan", "vendor": "Toyota", "model": "Camry" })
        );
        assert!(value.get("vehicle_type").is_none());
    }
}

//! Modelos de datos
//! 
//! Structs del dominio que mapean a las tablas de PostgreSQL y a los
//! cuerpos JSON de la API.

pub mod driver;
pub mod vehicle;

pub use driver::*;
pub use vehicle::*;

//! Middleware del sistema
//!
//! Este módulo contiene las capas tower-http que envuelven al router:
//! CORS y deadline por request.

pub mod cors;
pub mod timeout;

pub use cors::*;
pub use timeout::*;

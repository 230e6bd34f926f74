pub mod driver_routes;
pub mod health_routes;

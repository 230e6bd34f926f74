//! Deadline por request
//!
//! Al vencer, el futuro del handler se descarta junto con la query en curso
//! y la conexión vuelve al pool; el cliente recibe `408 Request Timeout`.

use std::time::Duration;

use tower_http::timeout::TimeoutLayer;

pub fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::new(timeout)
}

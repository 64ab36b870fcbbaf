//! CORS layer construction from configuration.

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use clinic_core::config::CorsConfig;

/// Build a CORS layer from the configured origin list.
///
/// A `*` entry opens the API to any origin; otherwise only the listed
/// origins are allowed.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}

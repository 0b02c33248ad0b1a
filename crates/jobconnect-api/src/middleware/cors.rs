//! CORS layer construction from configuration.

use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use jobconnect_core::config::app::CorsConfig;

/// Build a CORS layer from configuration.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<http::HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}

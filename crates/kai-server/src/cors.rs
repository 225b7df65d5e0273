use http::Method;
use http::header::HeaderName;
use kai_config::CorsConfig;
use tower_http::cors::{AllowHeaders, CorsLayer};

/// Build a Tower CORS layer from configuration
///
/// Empty method/header lists fall back to a POST-capable method set and
/// request-header mirroring rather than wildcards, so the layer stays
/// valid when credentials are allowed.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    // Origins
    let origins: Vec<http::HeaderValue> = config.origins.iter().filter_map(|o| o.parse().ok()).collect();
    layer = layer.allow_origin(origins);

    // Methods
    layer = if config.methods.is_empty() {
        layer.allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    } else {
        let methods: Vec<Method> = config.methods.iter().filter_map(|m| m.parse().ok()).collect();
        layer.allow_methods(methods)
    };

    // Headers
    layer = if config.headers.is_empty() {
        layer.allow_headers(AllowHeaders::mirror_request())
    } else {
        let headers: Vec<HeaderName> = config.headers.iter().filter_map(|h| h.parse().ok()).collect();
        layer.allow_headers(headers)
    };

    // Credentials
    if config.credentials {
        layer = layer.allow_credentials(true);
    }

    // Max age
    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}

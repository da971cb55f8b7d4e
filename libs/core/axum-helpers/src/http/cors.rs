use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// CORS policy applied uniformly to every gateway route.
///
/// - Origin: any
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Authorization
/// - No credentials (wildcard origins cannot carry them)
pub fn create_gateway_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

//! HTTP middleware.

pub mod cors;

pub use cors::create_gateway_cors_layer;

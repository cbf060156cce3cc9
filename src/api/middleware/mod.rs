// Middleware module - CORS and observability

pub mod cors;
pub mod observability;

pub use cors::create_cors_layer;

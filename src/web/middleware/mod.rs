//! Middleware for the HTTP API.

pub mod admin;
pub mod cors;
pub mod security;

pub use admin::{require_admin, AdminState};
pub use cors::create_cors_layer;
pub use security::security_headers;

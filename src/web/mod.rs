//! HTTP API for the relay.
//!
//! This module exposes the send endpoint, the application admin endpoints,
//! a health check, and the OpenAPI document.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;

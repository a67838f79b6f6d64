//! Application module for the mail relay.
//!
//! This module manages the callers of the mail API:
//! - Application records and API key generation
//! - The exact-match store behind them
//! - The directory used by the admin API and the dispatcher
//! - The static key registry loaded from configuration

mod directory;
mod registry;
mod store;
mod types;

pub use directory::ApplicationDirectory;
pub use registry::ApiKeyRegistry;
pub use store::{ApplicationStore, SqliteApplicationStore};
pub use types::{generate_api_key, Application, ApplicationField};

//! Mail relay
//!
//! An HTTP service that accepts JSON send requests from registered
//! applications and relays them to an SMTP server.

pub mod application;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod mail;
pub mod web;

pub use application::{
    ApiKeyRegistry, Application, ApplicationDirectory, ApplicationStore, SqliteApplicationStore,
};
pub use config::Config;
pub use db::Database;
pub use error::{RelayError, Result};
pub use mail::{
    Contact, LogMailer, MailDispatcher, MailError, Mailer, OutboundMessage, SendRequest,
    SendResponse, SmtpMailer,
};
pub use web::{AppState, WebServer};

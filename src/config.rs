//! Configuration module for the mail relay.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::{RelayError, Result};

/// Environment variable holding the path of the configuration file.
pub const CONFIG_PATH_ENV: &str = "MAIL_RELAY_CONFIG";

/// Environment variable overriding the admin token.
pub const ADMIN_TOKEN_ENV: &str = "MAIL_RELAY_ADMIN_TOKEN";

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Answer failures with a status per error kind (400, 401, 502) instead
    /// of the single 500.
    #[serde(default)]
    pub distinct_error_status: bool,
    /// Accept keys from the static `[api_keys]` table in addition to the directory.
    #[serde(default)]
    pub allow_legacy_keys: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            distinct_error_status: false,
            allow_legacy_keys: false,
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/mail-relay.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// SMTP transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    /// SMTP server hostname. Empty selects the log-only transport.
    #[serde(default)]
    pub host: String,
    /// SMTP server port.
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    /// Username for authentication.
    #[serde(default)]
    pub username: Option<String>,
    /// Password for authentication.
    #[serde(default)]
    pub password: Option<String>,
    /// TLS mode: "starttls", "tls", or "none".
    #[serde(default = "default_smtp_tls")]
    pub tls: String,
    /// Connection timeout in seconds.
    #[serde(default = "default_smtp_timeout")]
    pub timeout_secs: u64,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_tls() -> String {
    "starttls".to_string()
}

fn default_smtp_timeout() -> u64 {
    10
}

impl SmtpConfig {
    /// Whether an SMTP relay has been configured.
    pub fn is_configured(&self) -> bool {
        !self.host.trim().is_empty()
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_smtp_port(),
            username: None,
            password: None,
            tls: default_smtp_tls(),
            timeout_secs: default_smtp_timeout(),
        }
    }
}

/// Admin API configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminConfig {
    /// Bearer token required by the admin endpoints.
    #[serde(default)]
    pub token: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/mail-relay.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// SMTP transport configuration.
    #[serde(default)]
    pub smtp: SmtpConfig,
    /// Admin API configuration.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Static API keys mapped to an enabled flag.
    #[serde(default)]
    pub api_keys: HashMap<String, bool>,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(RelayError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| RelayError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `MAIL_RELAY_ADMIN_TOKEN`: Override the admin token
    pub fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var(ADMIN_TOKEN_ENV) {
            if !token.is_empty() {
                self.admin.token = token;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - the admin token is not set
    /// - the SMTP TLS mode is unknown
    pub fn validate(&self) -> Result<()> {
        if self.admin.token.is_empty() {
            return Err(RelayError::Config(
                "admin token is not set. \
                 Set it in config.toml or via MAIL_RELAY_ADMIN_TOKEN environment variable."
                    .to_string(),
            ));
        }
        if !matches!(self.smtp.tls.as_str(), "starttls" | "tls" | "none") {
            return Err(RelayError::Config(format!(
                "unknown smtp tls mode: {}",
                self.smtp.tls
            )));
        }
        Ok(())
    }
}

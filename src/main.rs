use std::sync::Arc;

use tracing::{error, info, warn};

use mail_relay::config::CONFIG_PATH_ENV;
use mail_relay::{
    ApiKeyRegistry, AppState, ApplicationDirectory, Config, Database, LogMailer, MailDispatcher,
    Mailer, SmtpMailer, SqliteApplicationStore, WebServer,
};

#[tokio::main]
async fn main() {
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.toml".to_string());

    // Load configuration
    let mut config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {config_path}: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    // Initialize logging
    if let Err(e) = mail_relay::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        mail_relay::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = run(config).await {
        error!("Mail relay stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> mail_relay::Result<()> {
    config.validate()?;

    info!("Mail relay starting");
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    let db = Database::open(&config.database.path).await?;
    let directory = ApplicationDirectory::new(Arc::new(SqliteApplicationStore::from_database(&db)));

    let mailer: Arc<dyn Mailer> = if config.smtp.is_configured() {
        info!(
            host = %config.smtp.host,
            port = config.smtp.port,
            tls = %config.smtp.tls,
            "Using SMTP transport"
        );
        Arc::new(SmtpMailer::from_config(&config.smtp)?)
    } else {
        warn!("No SMTP host configured; messages will only be logged");
        Arc::new(LogMailer)
    };

    let mut dispatcher = MailDispatcher::new(directory.clone(), mailer);
    if config.server.allow_legacy_keys {
        let registry = ApiKeyRegistry::new(config.api_keys.clone());
        if registry.is_empty() {
            warn!("Legacy API keys are allowed but the [api_keys] table is empty");
        } else {
            info!(keys = registry.len(), "Accepting legacy API keys");
        }
        dispatcher = dispatcher.with_legacy_keys(Arc::new(registry));
    }

    let app_state = AppState::new(directory, dispatcher);
    let server = WebServer::new(&config.server, &config.admin, app_state)?;
    server.run().await?;

    Ok(())
}

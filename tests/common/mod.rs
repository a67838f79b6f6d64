//! Test helpers for HTTP API tests.
//!
//! Provides a recording mailer and a fully wired test server.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;

use mail_relay::config::{AdminConfig, ServerConfig};
use mail_relay::mail::{MailError, Mailer, OutboundMessage};
use mail_relay::{
    ApiKeyRegistry, AppState, ApplicationDirectory, Database, MailDispatcher,
    SqliteApplicationStore, WebServer,
};

/// Admin token used by the test server.
pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Mailer that records messages instead of sending them.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundMessage>>,
    failure: Mutex<Option<String>>,
}

impl RecordingMailer {
    /// Messages handed to the transport so far.
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Make every following send fail with this transport message.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        if let Some(msg) = self.failure.lock().unwrap().clone() {
            return Err(MailError::Smtp(msg));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Options for building a test server.
#[derive(Default)]
pub struct TestOptions {
    pub distinct_error_status: bool,
    pub legacy_keys: Option<HashMap<String, bool>>,
}

/// A test server with handles on its collaborators.
pub struct TestContext {
    pub server: TestServer,
    pub directory: ApplicationDirectory,
    pub mailer: Arc<RecordingMailer>,
}

/// Create a test server backed by an in-memory database.
pub async fn create_test_server() -> TestContext {
    create_test_server_with(TestOptions::default()).await
}

/// Create a test server with the given options.
pub async fn create_test_server_with(options: TestOptions) -> TestContext {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    let directory = ApplicationDirectory::new(Arc::new(SqliteApplicationStore::from_database(&db)));
    let mailer = Arc::new(RecordingMailer::default());

    let mut dispatcher = MailDispatcher::new(directory.clone(), mailer.clone());
    if let Some(keys) = options.legacy_keys {
        dispatcher = dispatcher.with_legacy_keys(Arc::new(ApiKeyRegistry::new(keys)));
    }

    let server_config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        distinct_error_status: options.distinct_error_status,
        ..ServerConfig::default()
    };
    let admin_config = AdminConfig {
        token: ADMIN_TOKEN.to_string(),
    };

    let web_server = WebServer::new(
        &server_config,
        &admin_config,
        AppState::new(directory.clone(), dispatcher),
    )
    .expect("Failed to create web server");

    let server = TestServer::new(web_server.router()).expect("Failed to create test server");

    TestContext {
        server,
        directory,
        mailer,
    }
}

/// Value of the admin `Authorization` header.
pub fn admin_auth() -> String {
    format!("Bearer {}", ADMIN_TOKEN)
}

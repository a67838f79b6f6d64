//! API handlers for the relay.

pub mod applications;
pub mod send;

pub use applications::*;
pub use send::*;

use axum::http::StatusCode;

use crate::application::ApplicationDirectory;
use crate::mail::MailDispatcher;
use crate::web::error::{ApiError, ErrorCode};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registered applications.
    pub directory: ApplicationDirectory,
    /// Send request dispatcher.
    pub dispatcher: MailDispatcher,
    /// Report a status per error kind instead of the single 500.
    pub distinct_error_status: bool,
}

impl AppState {
    /// Create a new app state. Failures are reported as 500.
    pub fn new(directory: ApplicationDirectory, dispatcher: MailDispatcher) -> Self {
        Self {
            directory,
            dispatcher,
            distinct_error_status: false,
        }
    }

    /// Set whether failures get a status per error kind.
    pub fn with_distinct_error_status(mut self, distinct: bool) -> Self {
        self.distinct_error_status = distinct;
        self
    }

    /// Status for a failed request with the given error code.
    pub fn failure_status(&self, code: ErrorCode) -> StatusCode {
        if self.distinct_error_status {
            code.status_code()
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Collapse an error to 500 unless distinct statuses are enabled.
    pub fn hard_failure(&self, err: ApiError) -> ApiError {
        if self.distinct_error_status {
            err
        } else {
            err.into_internal()
        }
    }
}

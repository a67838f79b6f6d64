//! Application administration handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::application::Application;
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Query parameters selecting an application.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApplicationQuery {
    /// API key. Takes precedence over `name`.
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
    /// Application name.
    pub name: Option<String>,
}

/// Lookup key resolved from an [`ApplicationQuery`].
enum Selector<'a> {
    ApiKey(&'a str),
    Name(&'a str),
}

impl ApplicationQuery {
    fn selector(&self) -> Result<Selector<'_>, ApiError> {
        fn non_empty(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }

        if let Some(api_key) = non_empty(&self.api_key) {
            Ok(Selector::ApiKey(api_key))
        } else if let Some(name) = non_empty(&self.name) {
            Ok(Selector::Name(name))
        } else {
            Err(ApiError::bad_request("Either apiKey or name is required"))
        }
    }
}

/// PUT|POST /api/applications - Register an application.
///
/// A missing name or an already registered name is a hard failure: 500,
/// or 400 and 409 with distinct statuses.
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = "applications",
    params(
        ("name" = String, Query, description = "Application name")
    ),
    responses(
        (status = 200, description = "Application registered", body = Application),
        (status = 400, description = "Missing name (distinct statuses only)"),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 409, description = "Name already registered (distinct statuses only)"),
        (status = 500, description = "Missing or already registered name")
    ),
    security(
        ("admin_token" = [])
    )
)]
pub async fn create_application(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ApplicationQuery>,
) -> Result<Json<Application>, ApiError> {
    let name = query
        .name
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            state.hard_failure(ApiError::bad_request("Application name is required"))
        })?;

    if state.directory.exists_with_name(name).await? {
        return Err(state.hard_failure(ApiError::conflict(format!(
            "Application already exists: {name}"
        ))));
    }

    let application = state.directory.add(name).await?;
    Ok(Json(application))
}

/// GET /api/applications - Look up an application.
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = "applications",
    params(ApplicationQuery),
    responses(
        (status = 200, description = "Application found", body = Application),
        (status = 400, description = "Neither apiKey nor name given"),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 404, description = "Application not found")
    ),
    security(
        ("admin_token" = [])
    )
)]
pub async fn get_application(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ApplicationQuery>,
) -> Result<Json<Application>, ApiError> {
    let application = match query.selector()? {
        Selector::ApiKey(api_key) => state.directory.get_by_api_key(api_key).await?,
        Selector::Name(name) => state.directory.get_by_name(name).await?,
    };

    application
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Application not found"))
}

/// DELETE /api/applications - Remove applications.
///
/// Removing by name removes every application with that name. A request
/// with neither selector is a hard failure: 500, or 400 with distinct
/// statuses.
#[utoipa::path(
    delete,
    path = "/api/applications",
    tag = "applications",
    params(ApplicationQuery),
    responses(
        (status = 204, description = "Matching applications removed"),
        (status = 400, description = "Neither apiKey nor name given (distinct statuses only)"),
        (status = 401, description = "Missing or wrong admin token"),
        (status = 500, description = "Neither apiKey nor name given")
    ),
    security(
        ("admin_token" = [])
    )
)]
pub async fn delete_application(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ApplicationQuery>,
) -> Result<StatusCode, ApiError> {
    let selector = query.selector().map_err(|e| state.hard_failure(e))?;
    let removed = match selector {
        Selector::ApiKey(api_key) => state.directory.remove_by_api_key(api_key).await?,
        Selector::Name(name) => state.directory.remove_by_name(name).await?,
    };

    tracing::info!(removed, "Applications removed");
    Ok(StatusCode::NO_CONTENT)
}

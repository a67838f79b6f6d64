//! OpenAPI document for the HTTP API.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::application::Application;
use crate::mail::{ContactPayload, SendRequestPayload, SendResponse};
use crate::web::error::{ErrorBody, ErrorCode, ErrorDetail};

/// Registers the admin bearer token scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "admin_token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Static admin token from [admin].token"))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Mail relay API",
        description = "Relays JSON mail requests from registered applications to SMTP."
    ),
    paths(
        crate::web::handlers::send::send_mail,
        crate::web::handlers::applications::create_application,
        crate::web::handlers::applications::get_application,
        crate::web::handlers::applications::delete_application,
    ),
    components(schemas(
        SendRequestPayload,
        ContactPayload,
        SendResponse,
        Application,
        ErrorBody,
        ErrorDetail,
        ErrorCode
    )),
    tags(
        (name = "send", description = "Message relay"),
        (name = "applications", description = "Application administration")
    )
)]
pub struct ApiDoc;

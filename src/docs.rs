use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::AccessGrant;
use crate::errors::ErrorResponse;
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::auth::check,
        routes::auth::check_url,
        routes::health::health
    ),
    components(
        schemas(
            AccessGrant,
            routes::auth::UrlStatus,
            routes::health::HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Auth", description = "Authorization checks"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn swagger_routes() -> Router {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

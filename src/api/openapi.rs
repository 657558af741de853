//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, route, targets};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Adroute API",
        version = "1.0.0",
        description = "Real-time traffic routing decision REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Adroute Team", email = "contact@adroute.io")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Targets
        targets::list_targets,
        targets::create_target,
        targets::get_target,
        targets::update_target,
        // Routing
        route::route,
    ),
    components(
        schemas(
            // Targets
            crate::models::target::Target,
            crate::models::target::AcceptRules,
            crate::models::target::RuleClause,
            crate::models::target::CreateTarget,
            crate::models::target::UpdateTarget,
            targets::TargetIdResponse,
            // Routing
            crate::models::visitor::Visitor,
            crate::models::decision::Decision,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "targets", description = "Routing target management"),
        (name = "route", description = "Routing decisions")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

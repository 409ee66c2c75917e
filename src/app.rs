use axum::{routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::config::Config;
use crate::handlers::{fallback_handler, health_handler, index_handler};
use crate::routes;

/// Build the application router with tracing and CORS layers applied
pub fn build_router(config: &Config) -> Router {
    let mut router = Router::new()
        .route(routes::INDEX, get(index_handler))
        .route(routes::HEALTH, get(health_handler));

    if config.api_docs_enabled {
        router = router.merge(
            SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()),
        );
    }

    router
        .fallback(fallback_handler)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let allow_origin: AllowOrigin = if config.cors_allowed_origins.is_empty() {
        Any.into()
    } else {
        AllowOrigin::list(config.cors_allowed_origins.clone())
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{Endpoints, IndexResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "File Vault API",
        version = "1.0.0",
        description = "Entry point of the File Vault API, advertising the file and admin surfaces"
    ),
    paths(
        handlers::index::index_handler,
        handlers::health::health_handler
    ),
    components(
        schemas(
            IndexResponse,
            Endpoints,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "meta", description = "API metadata"),
        (name = "health", description = "Health check operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_index_and_health() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health"));
        assert_eq!(doc.info.title, "File Vault API");
    }

    #[test]
    fn test_openapi_registers_response_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components present").schemas;

        assert!(schemas.contains_key("IndexResponse"));
        assert!(schemas.contains_key("Endpoints"));
        assert!(schemas.contains_key("HealthResponse"));
    }
}

// Route path constants - single source of truth for all API paths

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/health";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";

// Advertised by the index payload, served elsewhere
pub const FILES: &str = "/api/files/";
pub const ADMIN: &str = "/admin/";

use serde::{Deserialize, Serialize};

use crate::routes;

pub const STATUS_OK: &str = "ok";
pub const WELCOME_MESSAGE: &str = "Welcome to File Vault API";

/// Paths of the API surfaces advertised by the index endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Endpoints {
    #[schema(example = "/api/files/")]
    pub files: String,
    #[schema(example = "/admin/")]
    pub admin: String,
}

/// Response type for the index endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IndexResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "Welcome to File Vault API")]
    pub message: String,
    pub endpoints: Endpoints,
}

impl IndexResponse {
    /// The fixed payload served at `/`
    pub fn welcome() -> Self {
        IndexResponse {
            status: STATUS_OK.to_string(),
            message: WELCOME_MESSAGE.to_string(),
            endpoints: Endpoints {
                files: routes::FILES.to_string(),
                admin: routes::ADMIN.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_welcome_serializes_to_expected_json() {
        let value = serde_json::to_value(IndexResponse::welcome()).unwrap();

        assert_eq!(
            value,
            json!({
                "status": "ok",
                "message": "Welcome to File Vault API",
                "endpoints": {
                    "files": "/api/files/",
                    "admin": "/admin/"
                }
            })
        );
    }

    #[test]
    fn test_endpoints_contain_exactly_files_and_admin() {
        let value = serde_json::to_value(IndexResponse::welcome()).unwrap();
        let endpoints = value["endpoints"].as_object().unwrap();

        let mut keys: Vec<&str> = endpoints.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["admin", "files"]);
    }
}

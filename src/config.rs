use std::env;
use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    /// Empty means any origin is allowed
    pub cors_allowed_origins: Vec<HeaderValue>,
    pub api_docs_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 5000,
            service_host: "0.0.0.0".to_string(),
            cors_allowed_origins: Vec::new(),
            api_docs_enabled: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let service_port = match env::var("SERVICE_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            Err(_) => defaults.service_port,
        };

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or(defaults.service_host);

        let cors_allowed_origins = match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(origins) => parse_origins(&origins)?,
            Err(_) => defaults.cors_allowed_origins,
        };

        let api_docs_enabled = match env::var("API_DOCS_ENABLED") {
            Ok(flag) => parse_flag("API_DOCS_ENABLED", &flag)?,
            Err(_) => defaults.api_docs_enabled,
        };

        Ok(Config {
            service_port,
            service_host,
            cors_allowed_origins,
            api_docs_enabled,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.bind_addr());
        if self.cors_allowed_origins.is_empty() {
            tracing::info!("  CORS allowed origins: any");
        } else {
            let origins: Vec<&str> = self
                .cors_allowed_origins
                .iter()
                .filter_map(|origin| origin.to_str().ok())
                .collect();
            tracing::info!("  CORS allowed origins: {}", origins.join(", "));
        }
        tracing::info!("  API docs: {}",
            if self.api_docs_enabled { "enabled" } else { "disabled" });
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>> {
    if raw.split(',').any(|origin| origin.trim() == "*") {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("CORS_ALLOWED_ORIGINS contains an invalid origin: '{}'", origin))
        })
        .collect()
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("{} must be true or false, got '{}'", name, other),
    }
}

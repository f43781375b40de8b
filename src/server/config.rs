use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_APPLICATION_ID_PREFIX: &str = "SSR";
const DEFAULT_APPLICATION_ID_FALLBACK_TOKEN: &str = "PUBLIC";
const DEFAULT_DEPARTMENT_ID_PREFIX: &str = "DEP";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Leading segment of application identifiers.
    pub application_id_prefix: String,
    /// Context token used when no authenticated actor submits an application.
    pub application_id_fallback_token: String,
    /// Prefix of compact department identifiers.
    pub department_id_prefix: String,

    /// Origin allowed by CORS; any origin when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            application_id_prefix: identifier_segment_var(
                "APPLICATION_ID_PREFIX",
                DEFAULT_APPLICATION_ID_PREFIX,
            )?,
            application_id_fallback_token: identifier_segment_var(
                "APPLICATION_ID_FALLBACK_TOKEN",
                DEFAULT_APPLICATION_ID_FALLBACK_TOKEN,
            )?,
            department_id_prefix: identifier_segment_var(
                "DEPARTMENT_ID_PREFIX",
                DEFAULT_DEPARTMENT_ID_PREFIX,
            )?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN").ok(),
        })
    }
}

/// Reads an optional identifier segment, falling back to `default`.
///
/// Segments end up verbatim inside issued identifiers, so they must be
/// non-empty and free of whitespace.
fn identifier_segment_var(name: &str, default: &str) -> Result<String, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

    validate_identifier_segment(name, value)
}

fn validate_identifier_segment(name: &str, value: String) -> Result<String, ConfigError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' must be non-empty and contain no whitespace", value),
        });
    }

    Ok(value)
}

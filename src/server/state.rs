//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool
//! and the identifier settings used when issuing application and department IDs.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::Config, service::identifier::IdentifierSettings};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// identifier settings sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Prefixes and fallback token used to render issued identifiers.
    pub identifiers: Arc<IdentifierSettings>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection, identifiers: IdentifierSettings) -> Self {
        Self {
            db,
            identifiers: Arc::new(identifiers),
        }
    }

    /// Builds the state from loaded configuration and a connected database.
    pub fn from_config(db: DatabaseConnection, config: &Config) -> Self {
        Self::new(
            db,
            IdentifierSettings {
                application_prefix: config.application_id_prefix.clone(),
                fallback_token: config.application_id_fallback_token.clone(),
                department_prefix: config.department_id_prefix.clone(),
            },
        )
    }
}

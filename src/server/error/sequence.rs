use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the named sequence issuer.
#[derive(Error, Debug)]
pub enum SequenceError {
    /// Counter name is empty or malformed. Rejected before touching storage.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid counter name '{0}'")]
    InvalidCounterName(String),

    /// The atomic increment (or read) could not be performed.
    ///
    /// No identifier may be assigned when this happens. Results in a 503
    /// Service Unavailable response.
    #[error("Counter '{name}' unavailable: {source}")]
    StorageUnavailable {
        /// Counter that was being accessed
        name: String,
        /// The underlying storage error
        #[source]
        source: sea_orm::DbErr,
    },

    /// A counter row holds a negative value. Only the issuer writes counters,
    /// so this indicates outside tampering.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Counter '{name}' holds invalid value {value}")]
    InvalidStoredValue {
        /// Counter holding the value
        name: String,
        /// The stored value
        value: i64,
    },
}

impl IntoResponse for SequenceError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCounterName(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::StorageUnavailable { .. } => {
                tracing::error!("{}", self);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Identifier service temporarily unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidStoredValue { .. } => super::InternalServerError(self).into_response(),
        }
    }
}

use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored application document no longer deserializes into its sections.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored document for application '{application_id}' is malformed: {source}")]
    CorruptDocument {
        /// Identifier of the affected application
        application_id: String,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// A status column holds a value outside the known set.
    #[error("Unknown application status '{0}'")]
    UnknownStatus(String),
}

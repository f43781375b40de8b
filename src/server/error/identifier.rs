use thiserror::Error;

/// Inputs the identifier formatter refuses to render or parse.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IdentifierError {
    /// Year component must have exactly four digits.
    #[error("Year {0} is outside the supported range 1000..=9999")]
    InvalidYear(i32),

    /// Sequence numbers start at 1.
    #[error("Sequence number must be positive")]
    InvalidSequence,

    /// An authenticated actor supplied an empty code.
    #[error("Context token must not be empty")]
    EmptyContextToken,

    /// The trailing sequence component of an identifier is not a number.
    #[error("Identifier '{0}' does not end in a sequence number")]
    Unparseable(String),
}

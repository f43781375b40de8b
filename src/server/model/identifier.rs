//! Context carried into identifier rendering.

/// Who an identifier is being issued on behalf of.
///
/// Identifiers embed the employee code of the authenticated actor. Public
/// submissions have no actor and render the configured fallback literal instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextToken {
    /// Employee code of the authenticated user.
    AuthenticatedActor(String),
    /// No authenticated actor, or the actor has no employee code.
    AnonymousFallback,
}

impl ContextToken {
    /// Builds a token from an optional employee code.
    ///
    /// Blank codes are treated as missing.
    pub fn from_employee_id(employee_id: Option<&str>) -> Self {
        match employee_id.map(str::trim) {
            Some(code) if !code.is_empty() => Self::AuthenticatedActor(code.to_string()),
            _ => Self::AnonymousFallback,
        }
    }
}

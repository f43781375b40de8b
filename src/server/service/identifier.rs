//! Rendering of issued sequence numbers into external identifiers.
//!
//! Application identifiers take the form `{prefix}-{token}-{year}-{seq}` with the
//! sequence zero-padded to four digits, e.g. `SSR-PUBLIC-2025-0001`. Department
//! identifiers use the compact `{prefix}{seq}` form padded to two digits, e.g.
//! `DEP01`. Padding is a minimum width: once a counter passes the padded range the
//! field widens (`10000`, `DEP100`) instead of truncating, so identifiers are not
//! fixed-length.

use crate::server::{error::identifier::IdentifierError, model::identifier::ContextToken};

pub const APPLICATION_SEQUENCE_WIDTH: usize = 4;
pub const DEPARTMENT_SEQUENCE_WIDTH: usize = 2;

const SEPARATOR: char = '-';

/// Prefixes and fallback token loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierSettings {
    pub application_prefix: String,
    pub fallback_token: String,
    pub department_prefix: String,
}

impl Default for IdentifierSettings {
    fn default() -> Self {
        Self {
            application_prefix: "SSR".to_string(),
            fallback_token: "PUBLIC".to_string(),
            department_prefix: "DEP".to_string(),
        }
    }
}

impl IdentifierSettings {
    pub fn application_formatter(&self) -> ApplicationIdFormatter<'_> {
        ApplicationIdFormatter::new(&self.application_prefix, &self.fallback_token)
    }

    pub fn department_formatter(&self) -> DepartmentIdFormatter<'_> {
        DepartmentIdFormatter::new(&self.department_prefix)
    }
}

/// Zero-pads `seq` to at least `width` digits.
pub fn pad_sequence(seq: u64, width: usize) -> String {
    format!("{:0>width$}", seq, width = width)
}

pub struct ApplicationIdFormatter<'a> {
    prefix: &'a str,
    fallback: &'a str,
}

impl<'a> ApplicationIdFormatter<'a> {
    pub fn new(prefix: &'a str, fallback: &'a str) -> Self {
        Self { prefix, fallback }
    }

    /// Renders an application identifier.
    ///
    /// # Arguments
    /// - `context` - Actor the identifier is issued for
    /// - `year` - Four-digit admission year
    /// - `seq` - Issued sequence number, starting at 1
    ///
    /// # Returns
    /// - `Ok(String)` - Rendered identifier
    /// - `Err(IdentifierError::InvalidYear)` - Year outside 1000..=9999
    /// - `Err(IdentifierError::InvalidSequence)` - Sequence is 0
    /// - `Err(IdentifierError::EmptyContextToken)` - Actor code is empty
    pub fn format(
        &self,
        context: &ContextToken,
        year: i32,
        seq: u64,
    ) -> Result<String, IdentifierError> {
        if !(1000..=9999).contains(&year) {
            return Err(IdentifierError::InvalidYear(year));
        }
        if seq == 0 {
            return Err(IdentifierError::InvalidSequence);
        }

        let token = match context {
            ContextToken::AuthenticatedActor(code) if code.is_empty() => {
                return Err(IdentifierError::EmptyContextToken)
            }
            ContextToken::AuthenticatedActor(code) => code.as_str(),
            ContextToken::AnonymousFallback => self.fallback,
        };

        Ok(format!(
            "{prefix}{sep}{token}{sep}{year}{sep}{seq}",
            prefix = self.prefix,
            sep = SEPARATOR,
            token = token,
            year = year,
            seq = pad_sequence(seq, APPLICATION_SEQUENCE_WIDTH),
        ))
    }

    /// Recovers the sequence number from the last `-` separated segment.
    pub fn parse_sequence(id: &str) -> Result<u64, IdentifierError> {
        id.rsplit(SEPARATOR)
            .next()
            .filter(|segment| !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|segment| segment.parse::<u64>().ok())
            .filter(|seq| *seq > 0)
            .ok_or_else(|| IdentifierError::Unparseable(id.to_string()))
    }
}

pub struct DepartmentIdFormatter<'a> {
    prefix: &'a str,
}

impl<'a> DepartmentIdFormatter<'a> {
    pub fn new(prefix: &'a str) -> Self {
        Self { prefix }
    }

    pub fn format(&self, seq: u64) -> Result<String, IdentifierError> {
        if seq == 0 {
            return Err(IdentifierError::InvalidSequence);
        }

        Ok(format!(
            "{}{}",
            self.prefix,
            pad_sequence(seq, DEPARTMENT_SEQUENCE_WIDTH)
        ))
    }

    pub fn parse_sequence(&self, id: &str) -> Result<u64, IdentifierError> {
        id.strip_prefix(self.prefix)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u64>().ok())
            .filter(|seq| *seq > 0)
            .ok_or_else(|| IdentifierError::Unparseable(id.to_string()))
    }
}

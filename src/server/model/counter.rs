//! Named counter domain models.

use crate::{model::counter::CounterDto, server::error::sequence::SequenceError};

const MAX_COUNTER_NAME_LEN: usize = 64;

/// Validated name of a persistent counter.
///
/// Names are non-empty, at most 64 characters and limited to ASCII
/// alphanumerics, `_` and `-`. Construction is the only validation point, so
/// an invalid name never reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CounterName(String);

impl CounterName {
    /// Validates `name`.
    ///
    /// # Returns
    /// - `Ok(CounterName)` - Name accepted
    /// - `Err(SequenceError::InvalidCounterName)` - Empty, too long or contains
    ///   characters outside `[A-Za-z0-9_-]`
    pub fn parse(name: impl Into<String>) -> Result<Self, SequenceError> {
        let name = name.into();

        let valid = !name.is_empty()
            && name.len() <= MAX_COUNTER_NAME_LEN
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');

        if !valid {
            return Err(SequenceError::InvalidCounterName(name));
        }

        Ok(Self(name))
    }

    /// Counter backing application identifiers issued during `year`.
    pub fn applications(year: i32) -> Self {
        Self(format!("applications_{}", year))
    }

    /// Counter backing department identifiers.
    pub fn departments() -> Self {
        Self("departments".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CounterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of a counter's last issued value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub value: u64,
}

impl Counter {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Err(SequenceError::InvalidStoredValue)` - Stored value is negative
    pub fn from_entity(entity: entity::counter::Model) -> Result<Self, SequenceError> {
        let value = u64::try_from(entity.value).map_err(|_| SequenceError::InvalidStoredValue {
            name: entity.name.clone(),
            value: entity.value,
        })?;

        Ok(Self {
            name: entity.name,
            value,
        })
    }

    pub fn into_dto(self) -> CounterDto {
        CounterDto {
            name: self.name,
            value: self.value,
        }
    }
}

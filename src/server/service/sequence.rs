//! Named sequence issuance.
//!
//! Each counter is a row in the `counter` table. Issuance is a single upsert that
//! creates the row at 1 or increments it, returning the new value, so concurrent
//! callers never observe the same number. A value issued for a row that later
//! fails to insert is simply skipped.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::counter::CounterRepository,
    error::sequence::SequenceError,
    model::counter::{Counter, CounterName},
};

pub struct SequenceIssuer<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SequenceIssuer<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues the next value of the named counter.
    ///
    /// # Returns
    /// - `Ok(u64)` - Post-increment value, 1 on first issuance
    /// - `Err(SequenceError::StorageUnavailable)` - Increment statement failed
    /// - `Err(SequenceError::InvalidStoredValue)` - Stored value is negative
    pub async fn next(&self, name: &CounterName) -> Result<u64, SequenceError> {
        let entity = CounterRepository::new(self.db)
            .increment(name)
            .await
            .map_err(|source| SequenceError::StorageUnavailable {
                name: name.to_string(),
                source,
            })?;

        let counter = Counter::from_entity(entity)?;

        tracing::debug!("Issued {} from counter {}", counter.value, counter.name);

        Ok(counter.value)
    }

    /// Reads the current value without issuing. Unknown counters read as 0.
    pub async fn current(&self, name: &CounterName) -> Result<Counter, SequenceError> {
        let entity = CounterRepository::new(self.db)
            .find_by_name(name)
            .await
            .map_err(|source| SequenceError::StorageUnavailable {
                name: name.to_string(),
                source,
            })?;

        match entity {
            Some(entity) => Counter::from_entity(entity),
            None => Ok(Counter {
                name: name.to_string(),
                value: 0,
            }),
        }
    }
}

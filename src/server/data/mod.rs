//! Database repository layer.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and perform all queries,
//! inserts and updates through SeaORM entity models. User and department
//! repositories convert to domain models at this boundary.

pub mod application;
pub mod counter;
pub mod department;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether `err` is a unique constraint violation on `column`.
pub fn is_unique_violation(err: &DbErr, column: &str) -> bool {
    matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains(column)
    )
}

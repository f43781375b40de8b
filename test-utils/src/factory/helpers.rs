//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an admin user and a department owned by that user.
///
/// # Returns
/// - `Ok((user, department))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_department_with_creator(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::department::Model), DbErr> {
    let user = crate::factory::user::UserFactory::new(db)
        .admin(true)
        .build()
        .await?;
    let department = crate::factory::department::create_department(db, user.id).await?;

    Ok((user, department))
}

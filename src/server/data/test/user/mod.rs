use crate::server::data::user::UserRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests finding an existing user by id.
///
/// Expected: Ok(Some(User)) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .name("Registrar")
        .employee_id("EMP001")
        .admin(true)
        .build()
        .await?;

    let user = UserRepository::new(db).find_by_id(created.id).await?.unwrap();

    assert_eq!(user.name, "Registrar");
    assert_eq!(user.employee_id.as_deref(), Some("EMP001"));
    assert!(user.admin);

    Ok(())
}

/// Tests finding a user id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).find_by_id(404).await?;

    assert!(user.is_none());

    Ok(())
}

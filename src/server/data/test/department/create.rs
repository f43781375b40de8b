use super::*;

fn params(name: &str, created_by: i32) -> CreateDepartmentParams {
    CreateDepartmentParams {
        name: name.to_string(),
        description: "Department of Physics".to_string(),
        image_url: "https://example.com/physics.png".to_string(),
        created_by,
    }
}

/// Tests creating a department stores the issued identifier.
///
/// Expected: Ok(Department) active with the given identifier
#[tokio::test]
async fn creates_department_with_identifier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).admin(true).build().await?;
    let repo = DepartmentRepository::new(db);

    let department = repo.create("DEP01".to_string(), params("Physics", user.id)).await?;

    assert_eq!(department.department_id, "DEP01");
    assert_eq!(department.name, "Physics");
    assert_eq!(department.created_by, user.id);
    assert!(department.is_active);

    assert!(repo.name_exists("Physics").await?);
    assert!(!repo.name_exists("Chemistry").await?);
    assert!(repo.find_by_department_id("DEP01").await?.is_some());
    assert!(repo.find_by_department_id("DEP02").await?.is_none());

    Ok(())
}

/// Tests the unique index rejects a reused department identifier.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_identifier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Department)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).admin(true).build().await?;
    let repo = DepartmentRepository::new(db);

    repo.create("DEP01".to_string(), params("Physics", user.id)).await?;
    let result = repo.create("DEP01".to_string(), params("Chemistry", user.id)).await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests updating the office-use object and status of an application.
///
/// Expected: Ok(Some) with the new object and status
#[tokio::test]
async fn replaces_office_use_and_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::application::ApplicationFactory::new(db)
        .office_use_only(json!({ "portalNumber": "P-1" }))
        .build()
        .await?;

    let updated = ApplicationRepository::new(db)
        .update_office_use(
            &created.application_id,
            json!({ "portalNumber": "P-1", "studentIdGenerated": "STU-9" }),
            ApplicationStatus::Approved,
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, "approved");
    assert_eq!(updated.office_use_only["studentIdGenerated"], "STU-9");
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating an unknown application.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_application() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ApplicationRepository::new(db)
        .update_office_use("SSR-PUBLIC-2025-9999", json!({}), ApplicationStatus::Submitted)
        .await?;

    assert!(result.is_none());

    Ok(())
}

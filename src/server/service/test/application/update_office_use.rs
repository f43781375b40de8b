use super::*;

/// Tests a non-blank student id approves the application and keeps existing keys.
///
/// Expected: status approved, merged office-use object
#[tokio::test]
async fn student_id_approves_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = IdentifierSettings::default();

    let created = factory::application::ApplicationFactory::new(db)
        .office_use_only(json!({ "applicationFeePaid": "yes" }))
        .build()
        .await?;

    let update = OfficeUseUpdate::from_value(json!({ "studentIdGenerated": "STU2025001" }))?;
    let updated = ApplicationService::new(db, &settings)
        .update_office_use(&created.application_id, update)
        .await?
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::Approved);
    assert_eq!(
        updated.office_use_only,
        json!({ "applicationFeePaid": "yes", "studentIdGenerated": "STU2025001" })
    );

    Ok(())
}

/// Tests clearing the student id returns an approved application to submitted.
///
/// Expected: status submitted
#[tokio::test]
async fn blank_student_id_reverts_to_submitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = IdentifierSettings::default();

    let created = factory::application::ApplicationFactory::new(db)
        .status("approved")
        .office_use_only(json!({ "studentIdGenerated": "STU2025001" }))
        .build()
        .await?;

    let update = OfficeUseUpdate::from_value(json!({ "studentIdGenerated": "" }))?;
    let updated = ApplicationService::new(db, &settings)
        .update_office_use(&created.application_id, update)
        .await?
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::Submitted);

    Ok(())
}

/// Tests updates without a student id leave the status alone.
///
/// Expected: status rejected is preserved
#[tokio::test]
async fn unrelated_fields_keep_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = IdentifierSettings::default();

    let created = factory::application::ApplicationFactory::new(db)
        .status("rejected")
        .build()
        .await?;

    let update = OfficeUseUpdate::from_value(json!({ "remarks": "Incomplete documents" }))?;
    let updated = ApplicationService::new(db, &settings)
        .update_office_use(&created.application_id, update)
        .await?
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::Rejected);
    assert_eq!(updated.office_use_only["remarks"], "Incomplete documents");

    Ok(())
}

/// Tests updating an unknown application.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_application_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = IdentifierSettings::default();

    let update = OfficeUseUpdate::from_value(json!({}))?;
    let result = ApplicationService::new(db, &settings)
        .update_office_use("SSR-PUBLIC-2025-0404", update)
        .await?;

    assert!(result.is_none());

    Ok(())
}

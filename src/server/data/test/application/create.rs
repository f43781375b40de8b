use super::*;

fn insert_params(application_id: &str, aadhar: Option<&str>) -> InsertApplicationParams {
    InsertApplicationParams {
        application_id: application_id.to_string(),
        details: ApplicationDetails {
            student_details: json!({
                "studentName": "Asha Rao",
                "gender": "Female",
                "aadharNumber": aadhar,
            }),
            contact_details: json!({ "mobileNo": "9876543210" }),
            ..Default::default()
        },
        status: ApplicationStatus::Submitted,
    }
}

/// Tests creating an application extracts summary columns.
///
/// Expected: Ok with summary columns and an empty office-use object
#[tokio::test]
async fn stores_summary_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let created = repo
        .create(insert_params("SSR-PUBLIC-2025-0001", Some("123412341234")))
        .await?;

    assert_eq!(created.application_id, "SSR-PUBLIC-2025-0001");
    assert_eq!(created.aadhar_number.as_deref(), Some("123412341234"));
    assert_eq!(created.student_name.as_deref(), Some("Asha Rao"));
    assert_eq!(created.mobile_no.as_deref(), Some("9876543210"));
    assert_eq!(created.gender.as_deref(), Some("Female"));
    assert_eq!(created.status, "submitted");
    assert_eq!(created.office_use_only, json!({}));
    assert_eq!(created.details["studentDetails"]["studentName"], "Asha Rao");

    assert!(repo.exists_with_aadhar("123412341234").await?);
    assert!(!repo.exists_with_aadhar("999999999999").await?);

    Ok(())
}

/// Tests the unique index rejects a second application with the same Aadhar number.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_aadhar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    repo.create(insert_params("SSR-PUBLIC-2025-0001", Some("123412341234")))
        .await?;
    let result = repo
        .create(insert_params("SSR-PUBLIC-2025-0002", Some("123412341234")))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests applications without an Aadhar number do not collide with each other.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_multiple_without_aadhar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    repo.create(insert_params("SSR-PUBLIC-2025-0001", None)).await?;
    repo.create(insert_params("SSR-PUBLIC-2025-0002", None)).await?;

    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}

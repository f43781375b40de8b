use super::*;

/// Tests applications are listed newest first.
///
/// Expected: Ok with the last created application first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for application_id in ["SSR-PUBLIC-2025-0001", "SSR-PUBLIC-2025-0002"] {
        factory::application::ApplicationFactory::new(db)
            .application_id(application_id)
            .build()
            .await?;
    }

    let applications = ApplicationRepository::new(db).get_all().await?;

    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].application_id, "SSR-PUBLIC-2025-0002");
    assert_eq!(applications[1].application_id, "SSR-PUBLIC-2025-0001");

    Ok(())
}

use super::*;
use crate::server::model::identifier::ContextToken;

/// Tests the first issuance on a new counter returns 1.
///
/// Expected: Ok(1)
#[tokio::test]
async fn first_issuance_returns_one() -> Result<(), SequenceError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let value = SequenceIssuer::new(db)
        .next(&CounterName::parse("brand_new").unwrap())
        .await?;

    assert_eq!(value, 1);

    Ok(())
}

/// Tests issued values render as consecutive public application identifiers.
///
/// Expected: SSR-PUBLIC-2025-0001 then SSR-PUBLIC-2025-0002
#[tokio::test]
async fn issues_consecutive_application_identifiers() -> Result<(), SequenceError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = IdentifierSettings::default();
    let formatter = settings.application_formatter();
    let issuer = SequenceIssuer::new(db);
    let name = CounterName::parse("applications_2025").unwrap();

    let first = formatter
        .format(&ContextToken::AnonymousFallback, 2025, issuer.next(&name).await?)
        .unwrap();
    let second = formatter
        .format(&ContextToken::AnonymousFallback, 2025, issuer.next(&name).await?)
        .unwrap();

    assert_eq!(first, "SSR-PUBLIC-2025-0001");
    assert_eq!(second, "SSR-PUBLIC-2025-0002");
    assert_eq!(ApplicationIdFormatter::parse_sequence(&second).unwrap(), 2);

    Ok(())
}

/// Tests counters for different years issue independently.
///
/// Expected: both years start at 1
#[tokio::test]
async fn years_issue_independently() -> Result<(), SequenceError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issuer = SequenceIssuer::new(db);

    assert_eq!(issuer.next(&CounterName::applications(2025)).await?, 1);
    assert_eq!(issuer.next(&CounterName::applications(2025)).await?, 2);
    assert_eq!(issuer.next(&CounterName::applications(2026)).await?, 1);

    Ok(())
}

/// Tests storage failures surface as unavailable rather than a value.
///
/// Expected: Err(SequenceError::StorageUnavailable)
#[tokio::test]
async fn missing_table_is_storage_unavailable() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SequenceIssuer::new(db)
        .next(&CounterName::departments())
        .await;

    assert!(matches!(
        result,
        Err(SequenceError::StorageUnavailable { name, .. }) if name == "departments"
    ));
}

/// Tests a negative stored value is reported instead of issued.
///
/// Expected: Err(SequenceError::InvalidStoredValue)
#[tokio::test]
async fn negative_stored_value_is_rejected() {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    entity::counter::ActiveModel {
        name: ActiveValue::Set("tampered".to_string()),
        value: ActiveValue::Set(-5),
    }
    .insert(db)
    .await
    .unwrap();

    let result = SequenceIssuer::new(db)
        .next(&CounterName::parse("tampered").unwrap())
        .await;

    assert!(matches!(
        result,
        Err(SequenceError::InvalidStoredValue { value: -4, .. })
    ));
}

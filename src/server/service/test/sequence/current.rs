use super::*;

/// Tests reading an unknown counter.
///
/// Expected: Ok with value 0 and no row created
#[tokio::test]
async fn unknown_counter_reads_zero() -> Result<(), SequenceError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issuer = SequenceIssuer::new(db);
    let name = CounterName::departments();

    assert_eq!(issuer.current(&name).await?.value, 0);
    assert_eq!(issuer.next(&name).await?, 1);

    Ok(())
}

/// Tests reading the current value never changes it.
///
/// Expected: repeated reads return the last issued value, next issuance continues
#[tokio::test]
async fn current_is_idempotent() -> Result<(), SequenceError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let issuer = SequenceIssuer::new(db);
    let name = CounterName::applications(2025);
    issuer.next(&name).await?;
    issuer.next(&name).await?;

    for _ in 0..3 {
        let counter = issuer.current(&name).await?;
        assert_eq!(counter.name, "applications_2025");
        assert_eq!(counter.value, 2);
    }
    assert_eq!(issuer.next(&name).await?, 3);

    Ok(())
}

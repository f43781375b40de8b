use super::*;

/// Tests first increment creates the counter at 1.
///
/// Expected: Ok with value 1
#[tokio::test]
async fn creates_missing_counter_at_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    let counter = repo.increment(&CounterName::departments()).await?;

    assert_eq!(counter.name, "departments");
    assert_eq!(counter.value, 1);

    Ok(())
}

/// Tests successive increments advance the stored value by exactly one.
///
/// Expected: Ok with values 1, 2, 3
#[tokio::test]
async fn advances_existing_counter_by_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    let name = CounterName::applications(2025);

    let values = vec![
        repo.increment(&name).await?.value,
        repo.increment(&name).await?.value,
        repo.increment(&name).await?.value,
    ];

    assert_eq!(values, vec![1, 2, 3]);

    Ok(())
}

/// Tests increments on one counter leave other counters untouched.
///
/// Expected: Ok with each counter at its own value
#[tokio::test]
async fn counters_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CounterRepository::new(db);
    repo.increment(&CounterName::applications(2025)).await?;
    repo.increment(&CounterName::applications(2025)).await?;
    let other = repo.increment(&CounterName::applications(2026)).await?;

    assert_eq!(other.value, 1);

    Ok(())
}

/// Tests increment fails when the counter table is missing.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_counter_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CounterRepository::new(db)
        .increment(&CounterName::departments())
        .await;

    assert!(result.is_err());

    Ok(())
}

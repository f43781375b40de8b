use std::collections::BTreeSet;

use tokio::task::JoinSet;

use super::*;

/// Issues `n` values concurrently from a fresh counter and collects them.
async fn issue_concurrently(n: u64) -> Vec<u64> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Counter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap().clone();
    let name = CounterName::applications(2025);

    let mut tasks = JoinSet::new();
    for _ in 0..n {
        let db = db.clone();
        let name = name.clone();
        tasks.spawn(async move { SequenceIssuer::new(&db).next(&name).await });
    }

    let mut values = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        values.push(joined.unwrap().unwrap());
    }

    values
}

fn assert_exact_range(values: Vec<u64>, n: u64) {
    let issued: BTreeSet<u64> = values.iter().copied().collect();
    let expected: BTreeSet<u64> = (1..=n).collect();

    assert_eq!(values.len() as u64, n, "one value per caller");
    assert_eq!(issued.len() as u64, n, "no value issued twice");
    assert_eq!(issued, expected);
}

/// Tests a single caller receives exactly 1.
///
/// Expected: {1}
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn single_caller_receives_one() {
    assert_exact_range(issue_concurrently(1).await, 1);
}

/// Tests ten concurrent callers receive 1 through 10 without duplicates.
///
/// Expected: {1..10}
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn ten_callers_receive_distinct_values() {
    assert_exact_range(issue_concurrently(10).await, 10);
}

/// Tests one hundred concurrent callers receive 1 through 100 without duplicates.
///
/// Expected: {1..100}
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn hundred_callers_receive_distinct_values() {
    assert_exact_range(issue_concurrently(100).await, 100);
}

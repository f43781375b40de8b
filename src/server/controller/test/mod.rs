use axum::{
    body::{to_bytes, Body},
    http::StatusCode,
    response::Response,
};
use serde_json::Value;
use test_utils::builder::TestBuilder;

use crate::server::{service::identifier::IdentifierSettings, state::AppState};


async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn state(db: &sea_orm::DatabaseConnection) -> AppState {
    AppState::new(db.clone(), IdentifierSettings::default())
}

fn all_tables() -> TestBuilder {
    TestBuilder::new().with_all_tables()
}

fn assert_status(response: &Response<Body>, status: StatusCode) {
    assert_eq!(response.status(), status);
}

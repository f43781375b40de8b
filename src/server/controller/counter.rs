use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, counter::CounterDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::counter::CounterName,
        service::sequence::SequenceIssuer,
        state::AppState,
    },
};

/// Tag for grouping counter endpoints in OpenAPI documentation
pub static COUNTER_TAG: &str = "counter";

/// Read the last issued value of a counter without issuing a new one.
///
/// Unknown counters read as 0.
///
/// # Access Control
/// - `Admin` - Only admins can inspect counters
#[utoipa::path(
    get,
    path = "/api/admin/counters/{name}",
    tag = COUNTER_TAG,
    params(
        ("name" = String, Path, description = "Counter name, e.g. applications_2025")
    ),
    responses(
        (status = 200, description = "Current counter value", body = CounterDto),
        (status = 400, description = "Invalid counter name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 503, description = "Counter storage unavailable", body = ErrorDto)
    ),
)]
pub async fn get_counter(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let name = CounterName::parse(name)?;
    let counter = SequenceIssuer::new(&state.db).current(&name).await?;

    Ok((StatusCode::OK, Json(counter.into_dto())))
}

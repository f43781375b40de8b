use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        application::{
            ApplicationDto, ApplicationSummaryDto, CreateApplicationDto, OfficeUseUpdateDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{ActorGuard, AuthGuard, Permission},
        model::application::{ApplicationDetails, CreateApplicationParams, OfficeUseUpdate},
        service::application::ApplicationService,
        state::AppState,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Submit an admissions application.
///
/// Open to anonymous applicants and logged in staff. The application identifier
/// embeds the staff member's employee code, or the fallback token for anonymous
/// submissions, and the current year.
///
/// # Returns
/// - `201 Created` - Application stored with a freshly issued identifier
/// - `400 Bad Request` - Aadhar number already registered
/// - `503 Service Unavailable` - Identifier could not be issued
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationDto),
        (status = 400, description = "Aadhar number already registered", body = ErrorDto),
        (status = 503, description = "Identifier service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let context = ActorGuard::new(&state.db, &session).context_token().await?;

    let params = CreateApplicationParams {
        details: ApplicationDetails::from_dto(payload),
        context,
        year: Utc::now().year(),
    };

    let application = ApplicationService::new(&state.db, &state.identifiers)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// List all applications, newest first.
///
/// # Access Control
/// - `Staff` - Only teachers and admins can list applications
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Application summaries", body = Vec<ApplicationSummaryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is neither a teacher nor an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_applications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let summaries = ApplicationService::new(&state.db, &state.identifiers)
        .get_all()
        .await?;

    let summaries_dto: Vec<_> = summaries.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(summaries_dto)))
}

/// Get a full application by its identifier.
///
/// # Access Control
/// - `Staff` - Only teachers and admins can view full applications
#[utoipa::path(
    get,
    path = "/api/applications/{application_id}",
    tag = APPLICATION_TAG,
    params(
        ("application_id" = String, Path, description = "Application identifier, e.g. SSR-PUBLIC-2025-0001")
    ),
    responses(
        (status = 200, description = "Application found", body = ApplicationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is neither a teacher nor an admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let application = ApplicationService::new(&state.db, &state.identifiers)
        .get_by_application_id(&application_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// Get the public summary of an application.
///
/// Lets applicants confirm their submission and check its status.
#[utoipa::path(
    get,
    path = "/api/applications/{application_id}/summary",
    tag = APPLICATION_TAG,
    params(
        ("application_id" = String, Path, description = "Application identifier")
    ),
    responses(
        (status = 200, description = "Application summary", body = ApplicationSummaryDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application_summary(
    State(state): State<AppState>,
    Path(application_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let summary = ApplicationService::new(&state.db, &state.identifiers)
        .get_summary(&application_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// Update the office-use section of an application.
///
/// Keys in the body replace stored keys; other stored keys are kept. Setting
/// `studentIdGenerated` to a non-blank string approves the application, any
/// other value returns it to submitted.
///
/// # Access Control
/// - `Staff` - Only teachers and admins can update office-use data
#[utoipa::path(
    put,
    path = "/api/applications/{application_id}/office-use",
    tag = APPLICATION_TAG,
    params(
        ("application_id" = String, Path, description = "Application identifier")
    ),
    request_body = OfficeUseUpdateDto,
    responses(
        (status = 200, description = "Application updated", body = ApplicationDto),
        (status = 400, description = "Body is not a JSON object", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is neither a teacher nor an admin", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_office_use(
    State(state): State<AppState>,
    session: Session,
    Path(application_id): Path<String>,
    Json(payload): Json<OfficeUseUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let update = OfficeUseUpdate::from_value(payload.0)?;

    let application = ApplicationService::new(&state.db, &state.identifiers)
        .update_office_use(&application_id, update)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

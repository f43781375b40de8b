use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        department::{CreateDepartmentDto, DepartmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::department::CreateDepartmentParams,
        service::department::DepartmentService,
        state::AppState,
    },
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// Create a department.
///
/// The department identifier is issued from the `departments` counter.
///
/// # Access Control
/// - `Admin` - Only admins can create departments
///
/// # Returns
/// - `201 Created` - Department created, e.g. `DEP01`
/// - `400 Bad Request` - Missing fields, length limits exceeded or duplicate name
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Department created", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 503, description = "Identifier service unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_department(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateDepartmentParams::from_dto(payload, user.id)?;

    let department = DepartmentService::new(&state.db, &state.identifiers)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(department.into_dto())))
}

/// List all departments ordered by department identifier.
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    responses(
        (status = 200, description = "All departments", body = Vec<DepartmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_departments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let departments = DepartmentService::new(&state.db, &state.identifiers)
        .get_all()
        .await?;

    let departments_dto: Vec<_> = departments.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(departments_dto)))
}

#[utoipa::path(
    get,
    path = "/api/departments/{department_id}",
    tag = DEPARTMENT_TAG,
    params(
        ("department_id" = String, Path, description = "Department identifier, e.g. DEP01")
    ),
    responses(
        (status = 200, description = "Department found", body = DepartmentDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let department = DepartmentService::new(&state.db, &state.identifiers)
        .get_by_department_id(&department_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

    Ok((StatusCode::OK, Json(department.into_dto())))
}

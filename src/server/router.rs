//! Route table and OpenAPI document.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{application::*, auth::*, counter::*, department::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Campus Registry API",
    description = "Admissions applications and departments with sequentially issued identifiers"
))]
pub struct ApiDoc;

/// Builds the API router and mounts Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(create_application, get_all_applications))
        .routes(routes!(get_application))
        .routes(routes!(get_application_summary))
        .routes(routes!(update_office_use))
        .routes(routes!(create_department, get_all_departments))
        .routes(routes!(get_department))
        .routes(routes!(get_counter))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: i32,
    /// Issued identifier, e.g. `DEP01`.
    pub department_id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub created_by: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Admission form as submitted by the applicant or a teacher on their behalf.
///
/// Sections are free-form JSON objects; only the fields needed for duplicate
/// detection and listings are read by the server.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationDto {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub student_details: Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub address_details: Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub contact_details: Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub other_details: Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub uploaded_files: Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub study_details: Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub preferences: Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub signature_upload: Value,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    /// Issued identifier, e.g. `SSR-PUBLIC-2025-0001`.
    pub application_id: String,
    pub status: String,
    #[schema(value_type = Object)]
    pub student_details: Value,
    #[schema(value_type = Object)]
    pub address_details: Value,
    #[schema(value_type = Object)]
    pub contact_details: Value,
    #[schema(value_type = Object)]
    pub other_details: Value,
    #[schema(value_type = Object)]
    pub uploaded_files: Value,
    #[schema(value_type = Object)]
    pub study_details: Value,
    #[schema(value_type = Object)]
    pub preferences: Value,
    #[schema(value_type = Object)]
    pub signature_upload: Value,
    #[schema(value_type = Object)]
    pub office_use_only: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummaryDto {
    pub application_id: String,
    pub student_name: Option<String>,
    pub mobile_no: Option<String>,
    pub gender: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update of the office-use section. Must be a JSON object.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct OfficeUseUpdateDto(pub Value);

//! Admissions application domain models.
//!
//! Applications keep the submitted form as a JSON document. The handful of
//! fields used for duplicate detection and listings (Aadhar number, student
//! name, mobile number, gender) are extracted once at submission time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    model::application::{ApplicationDto, ApplicationSummaryDto, CreateApplicationDto},
    server::{
        error::{internal::InternalError, AppError},
        model::identifier::ContextToken,
    },
};

/// Keys under `studentDetails` that have been used for the Aadhar number.
const AADHAR_KEYS: [&str; 4] = ["aadharNumber", "aadhar", "aadharNo", "adharNo"];

/// Office-use key whose presence decides approval.
const STUDENT_ID_GENERATED_KEY: &str = "studentIdGenerated";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(InternalError::UnknownStatus(other.to_string())),
        }
    }
}

/// Form sections of an application, stored as one JSON document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDetails {
    #[serde(default)]
    pub student_details: Value,
    #[serde(default)]
    pub address_details: Value,
    #[serde(default)]
    pub contact_details: Value,
    #[serde(default)]
    pub other_details: Value,
    #[serde(default)]
    pub uploaded_files: Value,
    #[serde(default)]
    pub study_details: Value,
    #[serde(default)]
    pub preferences: Value,
    #[serde(default)]
    pub signature_upload: Value,
}

impl ApplicationDetails {
    pub fn from_dto(dto: CreateApplicationDto) -> Self {
        Self {
            student_details: dto.student_details,
            address_details: dto.address_details,
            contact_details: dto.contact_details,
            other_details: dto.other_details,
            uploaded_files: dto.uploaded_files,
            study_details: dto.study_details,
            preferences: dto.preferences,
            signature_upload: dto.signature_upload,
        }
    }

    /// First non-blank Aadhar number found under any of the accepted keys.
    ///
    /// Numeric values are read in decimal and all whitespace is removed, so
    /// `"1234 5678 9012"` and `123456789012` name the same person.
    pub fn aadhar_number(&self) -> Option<String> {
        AADHAR_KEYS.iter().find_map(|key| {
            let digits: String = scalar_text(self.student_details.get(key)?)?
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            (!digits.is_empty()).then_some(digits)
        })
    }

    pub fn student_name(&self) -> Option<String> {
        non_blank_str(&self.student_details, "studentName")
    }

    pub fn gender(&self) -> Option<String> {
        non_blank_str(&self.student_details, "gender")
    }

    pub fn mobile_no(&self) -> Option<String> {
        non_blank_str(&self.contact_details, "mobileNo")
    }
}

fn non_blank_str(section: &Value, key: &str) -> Option<String> {
    let text = scalar_text(section.get(key)?)?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Full application as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub application_id: String,
    pub status: ApplicationStatus,
    pub details: ApplicationDetails,
    pub office_use_only: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Err(AppError::InternalErr)` - Stored document or status is malformed
    pub fn from_entity(entity: entity::application::Model) -> Result<Self, AppError> {
        let details = serde_json::from_value(entity.details).map_err(|source| {
            InternalError::CorruptDocument {
                application_id: entity.application_id.clone(),
                source,
            }
        })?;

        Ok(Self {
            status: ApplicationStatus::parse(&entity.status)?,
            application_id: entity.application_id,
            details,
            office_use_only: entity.office_use_only,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            application_id: self.application_id,
            status: self.status.as_str().to_string(),
            student_details: self.details.student_details,
            address_details: self.details.address_details,
            contact_details: self.details.contact_details,
            other_details: self.details.other_details,
            uploaded_files: self.details.uploaded_files,
            study_details: self.details.study_details,
            preferences: self.details.preferences,
            signature_upload: self.details.signature_upload,
            office_use_only: self.office_use_only,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Listing view of an application built from the extracted columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationSummary {
    pub application_id: String,
    pub student_name: Option<String>,
    pub mobile_no: Option<String>,
    pub gender: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

impl ApplicationSummary {
    pub fn from_entity(entity: entity::application::Model) -> Result<Self, InternalError> {
        Ok(Self {
            status: ApplicationStatus::parse(&entity.status)?,
            application_id: entity.application_id,
            student_name: entity.student_name,
            mobile_no: entity.mobile_no,
            gender: entity.gender,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ApplicationSummaryDto {
        ApplicationSummaryDto {
            application_id: self.application_id,
            student_name: self.student_name,
            mobile_no: self.mobile_no,
            gender: self.gender,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Input for submitting an application.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateApplicationParams {
    pub details: ApplicationDetails,
    /// Actor the identifier is issued on behalf of.
    pub context: ContextToken,
    /// Year component of the identifier and of its counter name.
    pub year: i32,
}

/// Row to insert once an identifier has been issued.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertApplicationParams {
    pub application_id: String,
    pub details: ApplicationDetails,
    pub status: ApplicationStatus,
}

/// Partial update of the office-use section.
///
/// Keys in the update replace keys of the stored object; other stored keys are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct OfficeUseUpdate {
    fields: Map<String, Value>,
}

impl OfficeUseUpdate {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Body is not a JSON object
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(AppError::BadRequest(
                "Office use data must be a JSON object".to_string(),
            )),
        }
    }

    /// Shallow merge over `existing`. A non-object stored value is treated as empty.
    pub fn merge_into(&self, existing: &Value) -> Value {
        let mut merged = match existing {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };

        for (key, value) in &self.fields {
            merged.insert(key.clone(), value.clone());
        }

        Value::Object(merged)
    }

    /// Status after applying this update.
    ///
    /// A non-blank `studentIdGenerated` approves the application; any other value
    /// for that key returns it to submitted. Without the key the status is unchanged.
    pub fn resulting_status(&self, current: ApplicationStatus) -> ApplicationStatus {
        match self.fields.get(STUDENT_ID_GENERATED_KEY) {
            None => current,
            Some(Value::String(id)) if !id.trim().is_empty() => ApplicationStatus::Approved,
            Some(_) => ApplicationStatus::Submitted,
        }
    }
}

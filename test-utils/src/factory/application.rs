//! Application factory for creating test admissions applications.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test applications with customizable fields.
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    application_id: String,
    aadhar_number: Option<String>,
    student_name: Option<String>,
    office_use_only: Value,
    status: String,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with default values.
    ///
    /// Defaults:
    /// - application_id: `"SSR-TEST-2025-{id}"`
    /// - aadhar_number: `None`
    /// - student_name: `"Student {id}"`
    /// - status: `"submitted"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            application_id: format!("SSR-TEST-2025-{:0>4}", id),
            aadhar_number: None,
            student_name: Some(format!("Student {}", id)),
            office_use_only: json!({}),
            status: "submitted".to_string(),
        }
    }

    pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = application_id.into();
        self
    }

    pub fn aadhar_number(mut self, aadhar_number: impl Into<String>) -> Self {
        self.aadhar_number = Some(aadhar_number.into());
        self
    }

    pub fn office_use_only(mut self, office_use_only: Value) -> Self {
        self.office_use_only = office_use_only;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the application entity into the database.
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        let now = Utc::now();
        let details = json!({
            "studentDetails": {
                "studentName": self.student_name,
                "aadharNumber": self.aadhar_number,
                "gender": "Female",
            },
            "contactDetails": { "mobileNo": "9000000000" },
        });

        entity::application::ActiveModel {
            application_id: ActiveValue::Set(self.application_id),
            aadhar_number: ActiveValue::Set(self.aadhar_number),
            student_name: ActiveValue::Set(self.student_name),
            mobile_no: ActiveValue::Set(Some("9000000000".to_string())),
            gender: ActiveValue::Set(Some("Female".to_string())),
            details: ActiveValue::Set(details),
            office_use_only: ActiveValue::Set(self.office_use_only),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an application with default values.
pub async fn create_application(
    db: &DatabaseConnection,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db).build().await
}

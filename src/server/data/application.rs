//! Application data repository.
//!
//! Returns entity models; the service converts them so that malformed stored
//! documents surface as internal errors rather than database errors.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use serde_json::Value;

use crate::server::model::application::{ApplicationStatus, InsertApplicationParams};

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an application with its issued identifier.
    ///
    /// Summary columns are extracted from the submitted sections and stored next to
    /// the full JSON document. `office_use_only` starts as an empty object.
    ///
    /// # Returns
    /// - `Ok(entity::application::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including unique violations on
    ///   `application_id` or `aadhar_number`
    pub async fn create(
        &self,
        params: InsertApplicationParams,
    ) -> Result<entity::application::Model, DbErr> {
        let now = Utc::now();
        let details =
            serde_json::to_value(&params.details).map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::application::ActiveModel {
            application_id: ActiveValue::Set(params.application_id),
            aadhar_number: ActiveValue::Set(params.details.aadhar_number()),
            student_name: ActiveValue::Set(params.details.student_name()),
            mobile_no: ActiveValue::Set(params.details.mobile_no()),
            gender: ActiveValue::Set(params.details.gender()),
            details: ActiveValue::Set(details),
            office_use_only: ActiveValue::Set(Value::Object(Default::default())),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn exists_with_aadhar(&self, aadhar_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Application::find()
            .filter(entity::application::Column::AadharNumber.eq(aadhar_number))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_application_id(
        &self,
        application_id: &str,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::ApplicationId.eq(application_id))
            .one(self.db)
            .await
    }

    /// All applications, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .order_by_desc(entity::application::Column::CreatedAt)
            .order_by_desc(entity::application::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the office-use object and status of an application.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated row
    /// - `Ok(None)` - No application with that identifier
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update_office_use(
        &self,
        application_id: &str,
        office_use_only: Value,
        status: ApplicationStatus,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        let Some(application) = self.find_by_application_id(application_id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::application::ActiveModel = application.into();
        active_model.office_use_only = ActiveValue::Set(office_use_only);
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }
}

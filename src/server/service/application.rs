//! Admissions application service.
//!
//! Submission checks the Aadhar number for duplicates, issues the next value of
//! the year's application counter, renders the identifier with the caller's
//! context token and inserts the row. A failed insert leaves a gap in the
//! counter; it never reuses a value.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{application::ApplicationRepository, is_unique_violation},
    error::AppError,
    model::{
        application::{
            Application, ApplicationStatus, ApplicationSummary, CreateApplicationParams,
            InsertApplicationParams, OfficeUseUpdate,
        },
        counter::CounterName,
    },
    service::{identifier::IdentifierSettings, sequence::SequenceIssuer},
};

pub const DUPLICATE_AADHAR_MESSAGE: &str = "User already registered with this Aadhar number";

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
    identifiers: &'a IdentifierSettings,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection, identifiers: &'a IdentifierSettings) -> Self {
        Self { db, identifiers }
    }

    /// Submits a new application under a freshly issued identifier.
    ///
    /// # Returns
    /// - `Ok(Application)` - Stored application with status `submitted`
    /// - `Err(AppError::BadRequest)` - Aadhar number already registered
    /// - `Err(AppError::SequenceErr)` - Identifier could not be issued
    /// - `Err(AppError::IdentifierErr)` - Identifier could not be rendered
    pub async fn create(&self, params: CreateApplicationParams) -> Result<Application, AppError> {
        let repo = ApplicationRepository::new(self.db);

        if let Some(aadhar_number) = params.details.aadhar_number() {
            if repo.exists_with_aadhar(&aadhar_number).await? {
                return Err(AppError::BadRequest(DUPLICATE_AADHAR_MESSAGE.to_string()));
            }
        }

        let seq = SequenceIssuer::new(self.db)
            .next(&CounterName::applications(params.year))
            .await?;
        let application_id = self.identifiers.application_formatter().format(
            &params.context,
            params.year,
            seq,
        )?;

        let model = repo
            .create(InsertApplicationParams {
                application_id,
                details: params.details,
                status: ApplicationStatus::Submitted,
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err, "aadhar_number") {
                    AppError::BadRequest(DUPLICATE_AADHAR_MESSAGE.to_string())
                } else {
                    err.into()
                }
            })?;

        tracing::info!("Application {} submitted", model.application_id);

        Application::from_entity(model)
    }

    pub async fn get_all(&self) -> Result<Vec<ApplicationSummary>, AppError> {
        let models = ApplicationRepository::new(self.db).get_all().await?;

        let summaries = models
            .into_iter()
            .map(ApplicationSummary::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(summaries)
    }

    pub async fn get_by_application_id(
        &self,
        application_id: &str,
    ) -> Result<Option<Application>, AppError> {
        let model = ApplicationRepository::new(self.db)
            .find_by_application_id(application_id)
            .await?;

        model.map(Application::from_entity).transpose()
    }

    pub async fn get_summary(
        &self,
        application_id: &str,
    ) -> Result<Option<ApplicationSummary>, AppError> {
        let model = ApplicationRepository::new(self.db)
            .find_by_application_id(application_id)
            .await?;

        Ok(model.map(ApplicationSummary::from_entity).transpose()?)
    }

    /// Merges office-use fields into an application and recomputes its status.
    ///
    /// # Returns
    /// - `Ok(Some(Application))` - Updated application
    /// - `Ok(None)` - No application with that identifier
    pub async fn update_office_use(
        &self,
        application_id: &str,
        update: OfficeUseUpdate,
    ) -> Result<Option<Application>, AppError> {
        let repo = ApplicationRepository::new(self.db);

        let Some(existing) = repo.find_by_application_id(application_id).await? else {
            return Ok(None);
        };

        let current = ApplicationStatus::parse(&existing.status)?;
        let office_use_only = update.merge_into(&existing.office_use_only);
        let status = update.resulting_status(current);

        let updated = repo
            .update_office_use(application_id, office_use_only, status)
            .await?;

        updated.map(Application::from_entity).transpose()
    }
}

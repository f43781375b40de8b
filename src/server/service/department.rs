//! Department service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{department::DepartmentRepository, is_unique_violation},
    error::AppError,
    model::{
        counter::CounterName,
        department::{CreateDepartmentParams, Department},
    },
    service::{identifier::IdentifierSettings, sequence::SequenceIssuer},
};

pub const DUPLICATE_NAME_MESSAGE: &str = "Department with this name already exists";

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
    identifiers: &'a IdentifierSettings,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, identifiers: &'a IdentifierSettings) -> Self {
        Self { db, identifiers }
    }

    /// Registers a department under the next `departments` counter value.
    ///
    /// # Returns
    /// - `Ok(Department)` - Created department, e.g. `DEP01`
    /// - `Err(AppError::BadRequest)` - A department with the same name exists
    /// - `Err(AppError::SequenceErr)` - Identifier could not be issued
    pub async fn create(&self, params: CreateDepartmentParams) -> Result<Department, AppError> {
        let repo = DepartmentRepository::new(self.db);

        if repo.name_exists(&params.name).await? {
            return Err(AppError::BadRequest(DUPLICATE_NAME_MESSAGE.to_string()));
        }

        let seq = SequenceIssuer::new(self.db)
            .next(&CounterName::departments())
            .await?;
        let department_id = self.identifiers.department_formatter().format(seq)?;

        let department = repo.create(department_id, params).await.map_err(|err| {
            if is_unique_violation(&err, "name") {
                AppError::BadRequest(DUPLICATE_NAME_MESSAGE.to_string())
            } else {
                err.into()
            }
        })?;

        tracing::info!(
            "Department {} ({}) created by user {}",
            department.department_id,
            department.name,
            department.created_by
        );

        Ok(department)
    }

    pub async fn get_all(&self) -> Result<Vec<Department>, AppError> {
        Ok(DepartmentRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_department_id(
        &self,
        department_id: &str,
    ) -> Result<Option<Department>, AppError> {
        Ok(DepartmentRepository::new(self.db)
            .find_by_department_id(department_id)
            .await?)
    }
}

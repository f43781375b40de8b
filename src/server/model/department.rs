//! Department domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::department::{CreateDepartmentDto, DepartmentDto},
    server::error::AppError,
};

const MAX_NAME_LEN: usize = 50;
const MAX_DESCRIPTION_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub department_id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub created_by: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Department {
    pub fn from_entity(entity: entity::department::Model) -> Self {
        Self {
            id: entity.id,
            department_id: entity.department_id,
            name: entity.name,
            description: entity.description,
            image_url: entity.image_url,
            created_by: entity.created_by,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            id: self.id,
            department_id: self.department_id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            created_by: self.created_by,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Validated input for registering a department.
///
/// The department identifier is not part of the parameters; it is issued by
/// the service at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDepartmentParams {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub created_by: i32,
}

impl CreateDepartmentParams {
    /// Validates the request body and attaches the creating user.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - A required field is blank or a length limit
    ///   is exceeded
    pub fn from_dto(dto: CreateDepartmentDto, created_by: i32) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        let description = dto.description.trim().to_string();
        let image_url = dto.image_url.trim().to_string();

        if name.is_empty() || description.is_empty() || image_url.is_empty() {
            return Err(AppError::BadRequest(
                "Please provide all required fields".to_string(),
            ));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::BadRequest(format!(
                "Name can not be more than {} characters",
                MAX_NAME_LEN
            )));
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(AppError::BadRequest(format!(
                "Description can not be more than {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }

        Ok(Self {
            name,
            description,
            image_url,
            created_by,
        })
    }
}

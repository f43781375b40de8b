//! User domain model.

use chrono::{DateTime, Utc};

use crate::{model::user::UserDto, server::model::identifier::ContextToken};

/// Staff or administrator account known to the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    /// Employee code embedded in identifiers this user issues.
    pub employee_id: Option<String>,
    pub admin: bool,
    /// Teachers process admissions alongside admins.
    pub teacher: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            employee_id: entity.employee_id,
            admin: entity.admin,
            teacher: entity.teacher,
            created_at: entity.created_at,
        }
    }

    /// Context token for identifiers issued on behalf of this user.
    pub fn context_token(&self) -> ContextToken {
        ContextToken::from_employee_id(self.employee_id.as_deref())
    }

    /// Whether the user may work on admissions: teachers and admins.
    pub fn is_staff(&self) -> bool {
        self.admin || self.teacher
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            employee_id: self.employee_id,
            admin: self.admin,
            teacher: self.teacher,
        }
    }
}

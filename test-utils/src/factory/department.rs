//! Department factory for creating test department entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departments with customizable fields.
///
/// The default department id is derived from the factory counter and does not
/// touch the `counter` table, so tests mixing factories with issued ids should
/// set `department_id` explicitly.
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    department_id: String,
    name: String,
    description: String,
    image_url: String,
    created_by: i32,
    is_active: bool,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new DepartmentFactory with default values.
    ///
    /// Defaults:
    /// - department_id: `"TEST{id}"`
    /// - name: `"Department {id}"`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            department_id: format!("TEST{}", id),
            name: format!("Department {}", id),
            description: "Test department".to_string(),
            image_url: "https://example.com/department.png".to_string(),
            created_by,
            is_active: true,
        }
    }

    pub fn department_id(mut self, department_id: impl Into<String>) -> Self {
        self.department_id = department_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the department entity into the database.
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            department_id: ActiveValue::Set(self.department_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            image_url: ActiveValue::Set(self.image_url),
            created_by: ActiveValue::Set(self.created_by),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with default values owned by `created_by`.
pub async fn create_department(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db, created_by).build().await
}

//! Department data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::department::{CreateDepartmentParams, Department};

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a department under an already issued department identifier.
    ///
    /// # Arguments
    /// - `department_id` - Identifier issued from the `departments` counter
    /// - `params` - Validated department fields and creating user
    ///
    /// # Returns
    /// - `Ok(Department)` - The created department
    /// - `Err(DbErr)` - Database error, including unique violations on name or id
    pub async fn create(
        &self,
        department_id: String,
        params: CreateDepartmentParams,
    ) -> Result<Department, DbErr> {
        let entity = entity::department::ActiveModel {
            department_id: ActiveValue::Set(department_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            image_url: ActiveValue::Set(params.image_url),
            created_by: ActiveValue::Set(params.created_by),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Department::from_entity(entity))
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Department::find()
            .filter(entity::department::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_by_department_id(
        &self,
        department_id: &str,
    ) -> Result<Option<Department>, DbErr> {
        let entity = entity::prelude::Department::find()
            .filter(entity::department::Column::DepartmentId.eq(department_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Department::from_entity))
    }

    /// All departments ordered by department identifier.
    ///
    /// Identifiers widen past `DEP99`, so ordering is by length first and then
    /// lexically, which matches issuance order for a single prefix.
    pub async fn get_all(&self) -> Result<Vec<Department>, DbErr> {
        let mut departments: Vec<Department> = entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::DepartmentId)
            .all(self.db)
            .await?
            .into_iter()
            .map(Department::from_entity)
            .collect();

        departments.sort_by(|a, b| {
            a.department_id
                .len()
                .cmp(&b.department_id.len())
                .then_with(|| a.department_id.cmp(&b.department_id))
        });

        Ok(departments)
    }
}

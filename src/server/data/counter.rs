//! Counter repository.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

use crate::server::model::counter::CounterName;

pub struct CounterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CounterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Atomically increments the named counter and returns the updated row.
    ///
    /// Executes as one `INSERT ... ON CONFLICT(name) DO UPDATE SET value = value + 1
    /// RETURNING *` statement. A missing counter is created with value 1.
    ///
    /// # Returns
    /// - `Ok(entity::counter::Model)` - Counter row after the increment
    /// - `Err(DbErr)` - Database error during the upsert
    pub async fn increment(&self, name: &CounterName) -> Result<entity::counter::Model, DbErr> {
        entity::prelude::Counter::insert(entity::counter::ActiveModel {
            name: ActiveValue::Set(name.as_str().to_string()),
            value: ActiveValue::Set(1),
        })
        .on_conflict(
            OnConflict::column(entity::counter::Column::Name)
                .value(
                    entity::counter::Column::Value,
                    Expr::col(entity::counter::Column::Value).add(1),
                )
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Reads a counter row without modifying it.
    pub async fn find_by_name(
        &self,
        name: &CounterName,
    ) -> Result<Option<entity::counter::Model>, DbErr> {
        entity::prelude::Counter::find_by_id(name.as_str().to_string())
            .one(self.db)
            .await
    }
}

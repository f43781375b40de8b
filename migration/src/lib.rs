pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_counter_table;
mod m20261001_000003_create_department_table;
mod m20261002_000004_create_application_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_counter_table::Migration),
            Box::new(m20261001_000003_create_department_table::Migration),
            Box::new(m20261002_000004_create_application_table::Migration),
        ]
    }
}

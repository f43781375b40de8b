use crate::server::{data::department::DepartmentRepository, model::department::CreateDepartmentParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

use crate::server::{data::counter::CounterRepository, model::counter::CounterName};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod increment;

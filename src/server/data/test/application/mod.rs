use crate::server::{
    data::application::ApplicationRepository,
    model::application::{ApplicationDetails, ApplicationStatus, InsertApplicationParams},
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update_office_use;

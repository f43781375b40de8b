use crate::server::{
    error::AppError,
    model::{
        application::{ApplicationDetails, ApplicationStatus, CreateApplicationParams, OfficeUseUpdate},
        identifier::ContextToken,
    },
    service::{
        application::{ApplicationService, DUPLICATE_AADHAR_MESSAGE},
        identifier::IdentifierSettings,
    },
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

mod update_office_use;

fn params(aadhar: Option<&str>, context: ContextToken, year: i32) -> CreateApplicationParams {
    CreateApplicationParams {
        details: ApplicationDetails {
            student_details: json!({
                "studentName": "Ravi Kumar",
                "gender": "Male",
                "aadharNo": aadhar,
            }),
            contact_details: json!({ "mobileNo": "9123456780" }),
            preferences: json!({ "course": "B.Sc Physics" }),
            ..Default::default()
        },
        context,
        year,
    }
}

fn params_with_aadhar(aadhar: Value) -> CreateApplicationParams {
    let mut params = params(None, ContextToken::AnonymousFallback, 2025);
    params.details.student_details = json!({
        "studentName": "Meera Nair",
        "aadharNumber": aadhar,
    });
    params
}

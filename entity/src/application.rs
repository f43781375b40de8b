use sea_orm::entity::prelude::*;

/// An admissions application.
///
/// The submitted form sections are kept as one JSON document in `details`;
/// the columns used for listing and duplicate detection are copied out of it
/// at insert time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub application_id: String,
    #[sea_orm(unique)]
    pub aadhar_number: Option<String>,
    pub student_name: Option<String>,
    pub mobile_no: Option<String>,
    pub gender: Option<String>,
    pub details: Json,
    pub office_use_only: Json,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

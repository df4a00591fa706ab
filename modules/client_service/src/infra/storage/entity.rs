//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Clients table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,

    pub surname: String,

    /// Case-folded copies of `name` and `surname` for search
    pub name_folded: String,

    pub surname_folded: String,

    /// Stored lower-case
    #[sea_orm(unique)]
    pub email: Option<String>,

    pub phone: Option<String>,

    pub address: Option<String>,

    #[sea_orm(unique)]
    pub tax_id: Option<String>,

    #[sea_orm(unique)]
    pub identity_number: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    pub active: bool,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

//! SeaORM entities for database tables
//!
//! Enum columns (`status`, `document_type`) hold the canonical upper-case
//! names.

/// Cases table
pub mod case {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "cases")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        #[sea_orm(unique)]
        pub case_number: String,

        pub title: String,

        /// Case-folded copies of `case_number` and `title` for search
        pub case_number_folded: String,

        pub title_folded: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub description: Option<String>,

        pub status: String,

        pub open_date: Date,

        pub close_date: Option<Date>,

        pub assigned_user_id: Option<i64>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::case_client::Entity")]
        CaseClients,
        #[sea_orm(has_many = "super::hearing::Entity")]
        Hearings,
        #[sea_orm(has_many = "super::document::Entity")]
        Documents,
    }

    impl Related<super::case_client::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::CaseClients.def()
        }
    }

    impl Related<super::hearing::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Hearings.def()
        }
    }

    impl Related<super::document::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Documents.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Case ↔ client relation table; one row per link
pub mod case_client {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "case_clients")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub case_id: i64,

        /// Client id owned by the client service; not a foreign key here
        #[sea_orm(primary_key, auto_increment = false)]
        pub client_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::case::Entity",
            from = "Column::CaseId",
            to = "super::case::Column::Id"
        )]
        Case,
    }

    impl Related<super::case::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Case.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Hearings table
pub mod hearing {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "hearings")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        pub case_id: i64,

        pub title: Option<String>,

        pub judge_name: Option<String>,

        pub scheduled_date: DateTimeUtc,

        pub actual_start_time: Option<DateTimeUtc>,

        pub actual_end_time: Option<DateTimeUtc>,

        pub location: String,

        pub status: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub notes: Option<String>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::case::Entity",
            from = "Column::CaseId",
            to = "super::case::Column::Id"
        )]
        Case,
    }

    impl Related<super::case::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Case.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Documents table
pub mod document {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "documents")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,

        pub case_id: i64,

        pub title: String,

        pub document_type: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub content: Option<String>,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::case::Entity",
            from = "Column::CaseId",
            to = "super::case::Column::Id"
        )]
        Case,
    }

    impl Related<super::case::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Case.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

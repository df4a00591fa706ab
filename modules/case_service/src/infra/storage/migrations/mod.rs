//! Database migrations for the case service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Each module tracks its migrations in its own table
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_case_service").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_cases::Migration),
            Box::new(m20250301_000002_create_hearings_documents::Migration),
        ]
    }
}

mod m20250301_000001_create_cases {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Cases::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Cases::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Cases::CaseNumber).string_len(64).not_null())
                        .col(ColumnDef::new(Cases::Title).string_len(255).not_null())
                        .col(
                            ColumnDef::new(Cases::CaseNumberFolded)
                                .string_len(256)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Cases::TitleFolded).string_len(1020).not_null())
                        .col(ColumnDef::new(Cases::Description).text())
                        .col(ColumnDef::new(Cases::Status).string_len(32).not_null())
                        .col(ColumnDef::new(Cases::OpenDate).date().not_null())
                        .col(ColumnDef::new(Cases::CloseDate).date())
                        .col(ColumnDef::new(Cases::AssignedUserId).big_integer())
                        .col(
                            ColumnDef::new(Cases::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Cases::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // The unique index is the authority on case-number collisions
            manager
                .create_index(
                    Index::create()
                        .name("ux_cases_case_number")
                        .table(Cases::Table)
                        .col(Cases::CaseNumber)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_cases_status")
                        .table(Cases::Table)
                        .col(Cases::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_cases_assigned_user_id")
                        .table(Cases::Table)
                        .col(Cases::AssignedUserId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CaseClients::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(CaseClients::CaseId).big_integer().not_null())
                        .col(
                            ColumnDef::new(CaseClients::ClientId)
                                .big_integer()
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .col(CaseClients::CaseId)
                                .col(CaseClients::ClientId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_case_clients_case")
                                .from(CaseClients::Table, CaseClients::CaseId)
                                .to(Cases::Table, Cases::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_case_clients_client_id")
                        .table(CaseClients::Table)
                        .col(CaseClients::ClientId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(CaseClients::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Cases::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Cases {
        Table,
        Id,
        CaseNumber,
        Title,
        CaseNumberFolded,
        TitleFolded,
        Description,
        Status,
        OpenDate,
        CloseDate,
        AssignedUserId,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum CaseClients {
        Table,
        CaseId,
        ClientId,
    }
}

mod m20250301_000002_create_hearings_documents {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Hearings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Hearings::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Hearings::CaseId).big_integer().not_null())
                        .col(ColumnDef::new(Hearings::Title).string_len(255))
                        .col(ColumnDef::new(Hearings::JudgeName).string_len(100))
                        .col(
                            ColumnDef::new(Hearings::ScheduledDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Hearings::ActualStartTime).timestamp_with_time_zone())
                        .col(ColumnDef::new(Hearings::ActualEndTime).timestamp_with_time_zone())
                        .col(ColumnDef::new(Hearings::Location).string_len(255).not_null())
                        .col(ColumnDef::new(Hearings::Status).string_len(32).not_null())
                        .col(ColumnDef::new(Hearings::Notes).text())
                        .col(
                            ColumnDef::new(Hearings::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Hearings::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_hearings_case")
                                .from(Hearings::Table, Hearings::CaseId)
                                .to(Cases::Table, Cases::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_hearings_case_id")
                        .table(Hearings::Table)
                        .col(Hearings::CaseId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_hearings_scheduled_date")
                        .table(Hearings::Table)
                        .col(Hearings::ScheduledDate)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Documents::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Documents::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Documents::CaseId).big_integer().not_null())
                        .col(ColumnDef::new(Documents::Title).string_len(255).not_null())
                        .col(
                            ColumnDef::new(Documents::DocumentType)
                                .string_len(32)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Documents::Content).text())
                        .col(
                            ColumnDef::new(Documents::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Documents::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_documents_case")
                                .from(Documents::Table, Documents::CaseId)
                                .to(Cases::Table, Cases::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_documents_case_id")
                        .table(Documents::Table)
                        .col(Documents::CaseId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Documents::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Hearings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Hearings {
        Table,
        Id,
        CaseId,
        Title,
        JudgeName,
        ScheduledDate,
        ActualStartTime,
        ActualEndTime,
        Location,
        Status,
        Notes,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Documents {
        Table,
        Id,
        CaseId,
        Title,
        DocumentType,
        Content,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Cases {
        Table,
        Id,
    }
}

//! Database migrations for the client service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Each module tracks its migrations in its own table
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_client_service").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_clients::Migration)]
    }
}

mod m20250301_000001_create_clients {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Clients::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Clients::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Clients::Name).string_len(100).not_null())
                        .col(ColumnDef::new(Clients::Surname).string_len(100).not_null())
                        .col(ColumnDef::new(Clients::NameFolded).string_len(400).not_null())
                        .col(
                            ColumnDef::new(Clients::SurnameFolded)
                                .string_len(400)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Clients::Email).string_len(254))
                        .col(ColumnDef::new(Clients::Phone).string_len(50))
                        .col(ColumnDef::new(Clients::Address).string_len(500))
                        .col(ColumnDef::new(Clients::TaxId).string_len(50))
                        .col(ColumnDef::new(Clients::IdentityNumber).string_len(50))
                        .col(ColumnDef::new(Clients::Notes).text())
                        .col(
                            ColumnDef::new(Clients::Active)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Clients::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Clients::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            // NULLs never collide, so absent values stay unconstrained
            for (name, column) in [
                ("ux_clients_email", Clients::Email),
                ("ux_clients_tax_id", Clients::TaxId),
                ("ux_clients_identity_number", Clients::IdentityNumber),
            ] {
                manager
                    .create_index(
                        Index::create()
                            .name(name)
                            .table(Clients::Table)
                            .col(column)
                            .unique()
                            .to_owned(),
                    )
                    .await?;
            }

            manager
                .create_index(
                    Index::create()
                        .name("idx_clients_surname")
                        .table(Clients::Table)
                        .col(Clients::Surname)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Clients::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Clients {
        Table,
        Id,
        Name,
        Surname,
        NameFolded,
        SurnameFolded,
        Email,
        Phone,
        Address,
        TaxId,
        IdentityNumber,
        Notes,
        Active,
        CreatedAt,
        UpdatedAt,
    }
}

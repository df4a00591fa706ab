//! Database migrations for the user service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Each module tracks its migrations in its own table
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_user_service").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_users::Migration)]
    }
}

mod m20250301_000001_create_users {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Users::Username).string_len(50).not_null())
                        .col(ColumnDef::new(Users::Email).string_len(254).not_null())
                        .col(ColumnDef::new(Users::FirstName).string_len(100))
                        .col(ColumnDef::new(Users::LastName).string_len(100))
                        .col(
                            ColumnDef::new(Users::Enabled)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Users::KeycloakId).string_len(100))
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Users::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("ux_users_username")
                        .table(Users::Table)
                        .col(Users::Username)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("ux_users_email")
                        .table(Users::Table)
                        .col(Users::Email)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(UserRoles::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(UserRoles::UserId).big_integer().not_null())
                        .col(ColumnDef::new(UserRoles::Role).string_len(50).not_null())
                        .primary_key(Index::create().col(UserRoles::UserId).col(UserRoles::Role))
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_user_roles_user")
                                .from(UserRoles::Table, UserRoles::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(UserRoles::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Users {
        Table,
        Id,
        Username,
        Email,
        FirstName,
        LastName,
        Enabled,
        KeycloakId,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum UserRoles {
        Table,
        UserId,
        Role,
    }
}

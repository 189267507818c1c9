//! Create `customers` table.
//!
//! Root record type; sales orders reference it through `entity`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(pk_auto(Customers::Id))
                    .col(string_len(Customers::EntityId, 32).unique_key().not_null())
                    .col(string_len(Customers::CompanyName, 256).not_null())
                    .col(string_len(Customers::Email, 256).not_null())
                    .col(string_len(Customers::Status, 32).not_null())
                    .col(string_len(Customers::DateCreated, 32).not_null())
                    .col(string_len_null(Customers::LastUpdated, 32))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customers { Table, Id, EntityId, CompanyName, Email, Status, DateCreated, LastUpdated }

//! Create `sales_orders` table.
//! Each order belongs to exactly one customer; deleting a referenced customer is restricted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalesOrders::Table)
                    .if_not_exists()
                    .col(pk_auto(SalesOrders::Id))
                    .col(string_len(SalesOrders::TranId, 32).unique_key().not_null())
                    .col(integer(SalesOrders::Entity).not_null())
                    .col(double(SalesOrders::Total).not_null())
                    .col(string_len(SalesOrders::Status, 32).not_null())
                    .col(string_len(SalesOrders::Trandate, 16).not_null())
                    .col(string_len_null(SalesOrders::LastUpdated, 32))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sales_orders_customer")
                            .from(SalesOrders::Table, SalesOrders::Entity)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SalesOrders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SalesOrders {
    Table,
    Id,
    TranId,
    Entity,
    Total,
    Status,
    Trandate,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Customers { Table, Id }

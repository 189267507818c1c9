use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SalesOrders: lookups by owning customer (dependency check on customer delete)
        manager
            .create_index(
                Index::create()
                    .name("idx_sales_orders_entity")
                    .table(SalesOrders::Table)
                    .col(SalesOrders::Entity)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_sales_orders_entity").table(SalesOrders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SalesOrders { Table, Entity }

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::sales_order::{self, SalesOrderInput, SalesOrderPatch};

use crate::errors::ServiceError;

/// Persistence seam for sales order records. Implementations own the
/// customer-existence check so it runs in the same transaction as the write.
#[async_trait]
pub trait SalesOrderRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<sales_order::Model>, ServiceError>;
    async fn create(&self, input: &SalesOrderInput) -> Result<sales_order::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<sales_order::Model>, ServiceError>;
    async fn update(&self, id: i32, patch: &SalesOrderPatch) -> Result<Option<sales_order::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmSalesOrderRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl SalesOrderRepository for SeaOrmSalesOrderRepository {
    async fn list(&self) -> Result<Vec<sales_order::Model>, ServiceError> {
        Ok(sales_order::list(&self.db).await?)
    }

    async fn create(&self, input: &SalesOrderInput) -> Result<sales_order::Model, ServiceError> {
        Ok(sales_order::create(&self.db, input).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<sales_order::Model>, ServiceError> {
        Ok(sales_order::find(&self.db, id).await?)
    }

    async fn update(&self, id: i32, patch: &SalesOrderPatch) -> Result<Option<sales_order::Model>, ServiceError> {
        Ok(sales_order::update(&self.db, id, patch).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(sales_order::delete(&self.db, id).await?)
    }
}

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::customer::{self, CustomerInput, CustomerPatch};

use crate::errors::ServiceError;

/// Persistence seam for customer records.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<customer::Model>, ServiceError>;
    async fn create(&self, input: &CustomerInput) -> Result<customer::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<customer::Model>, ServiceError>;
    async fn update(&self, id: i32, patch: &CustomerPatch) -> Result<Option<customer::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn list(&self) -> Result<Vec<customer::Model>, ServiceError> {
        Ok(customer::list(&self.db).await?)
    }

    async fn create(&self, input: &CustomerInput) -> Result<customer::Model, ServiceError> {
        Ok(customer::create(&self.db, input).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<customer::Model>, ServiceError> {
        Ok(customer::find(&self.db, id).await?)
    }

    async fn update(&self, id: i32, patch: &CustomerPatch) -> Result<Option<customer::Model>, ServiceError> {
        Ok(customer::update(&self.db, id, patch).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(customer::delete(&self.db, id).await?)
    }
}

use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::customer::{self, CustomerInput, CustomerPatch};

use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Application service for the customer record: turns absent rows into
/// `NotFound` and logs every mutation.
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<customer::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self, input), fields(company_name = %input.company_name))]
    pub async fn create(&self, input: CustomerInput) -> Result<customer::Model, ServiceError> {
        let created = self.repo.create(&input).await?;
        info!(id = created.id, entity_id = %created.entity_id, "customer_created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<customer::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("Customer"))
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: CustomerPatch) -> Result<customer::Model, ServiceError> {
        let updated = self.repo.update(id, &patch).await?.ok_or_else(|| ServiceError::not_found("Customer"))?;
        info!(id, status = ?updated.status, "customer_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        match self.repo.delete(id).await {
            Ok(true) => {
                info!(id, "customer_deleted");
                Ok(())
            }
            Ok(false) => Err(ServiceError::not_found("Customer")),
            Err(e @ ServiceError::Conflict(_)) => {
                warn!(id, error = %e, "customer_delete_refused");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}

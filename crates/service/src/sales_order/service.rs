use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::sales_order::{self, SalesOrderInput, SalesOrderPatch};

use crate::errors::ServiceError;
use crate::sales_order::repository::SalesOrderRepository;

/// Application service for the sales order record.
pub struct SalesOrderService {
    repo: Arc<dyn SalesOrderRepository>,
}

impl SalesOrderService {
    pub fn new(repo: Arc<dyn SalesOrderRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<sales_order::Model>, ServiceError> {
        self.repo.list().await
    }

    /// Create an order; fails with `UnknownCustomer` when `entity` does not
    /// name an existing customer, in which case nothing is written.
    #[instrument(skip(self, input), fields(entity = ?input.customer_id, total = input.total))]
    pub async fn create(&self, input: SalesOrderInput) -> Result<sales_order::Model, ServiceError> {
        match self.repo.create(&input).await {
            Ok(created) => {
                info!(id = created.id, tran_id = %created.tran_id, entity = created.customer_id, "sales_order_created");
                Ok(created)
            }
            Err(e @ ServiceError::UnknownCustomer(_)) => {
                warn!(error = %e, "sales_order_rejected");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get(&self, id: i32) -> Result<sales_order::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("Sales Order"))
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: SalesOrderPatch) -> Result<sales_order::Model, ServiceError> {
        let updated = self.repo.update(id, &patch).await?.ok_or_else(|| ServiceError::not_found("Sales Order"))?;
        info!(id, status = ?updated.status, "sales_order_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            info!(id, "sales_order_deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found("Sales Order"))
        }
    }
}

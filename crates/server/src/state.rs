use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::customer::{CustomerService, SeaOrmCustomerRepository};
use service::sales_order::{SalesOrderService, SeaOrmSalesOrderRepository};

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub customers: Arc<CustomerService>,
    pub sales_orders: Arc<SalesOrderService>,
}

impl ServerState {
    /// Wire both record services to the SeaORM repositories over `db`.
    pub fn new(db: DatabaseConnection) -> Self {
        let customers = CustomerService::new(Arc::new(SeaOrmCustomerRepository { db: db.clone() }));
        let sales_orders = SalesOrderService::new(Arc::new(SeaOrmSalesOrderRepository { db: db.clone() }));
        Self { db, customers: Arc::new(customers), sales_orders: Arc::new(sales_orders) }
    }
}

pub mod repository;
pub mod service;

pub use repository::{SalesOrderRepository, SeaOrmSalesOrderRepository};
pub use service::SalesOrderService;

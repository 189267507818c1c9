pub mod repository;
pub mod service;

pub use repository::{CustomerRepository, SeaOrmCustomerRepository};
pub use service::CustomerService;

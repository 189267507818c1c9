//! Service layer providing record-oriented CRUD operations on top of models.
//! - Separates business rules (not-found, referential checks) from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Repositories are traits so handlers can be exercised without a database.

pub mod errors;
pub mod runtime;
pub mod customer;
pub mod sales_order;
#[cfg(test)]
pub mod test_support;

pub mod errors;
pub mod db;
pub mod timestamps;
pub mod customer;
pub mod sales_order;

#[cfg(test)]
mod tests;

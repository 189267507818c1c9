use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("Customer ID {0} not found")]
    UnknownCustomer(i32),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Db(e.to_string())
    }
}

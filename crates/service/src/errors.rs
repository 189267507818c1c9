use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("Customer ID {0} not found")]
    UnknownCustomer(i32),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::UnknownCustomer(id) => Self::UnknownCustomer(id),
            ModelError::Conflict(msg) => Self::Conflict(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

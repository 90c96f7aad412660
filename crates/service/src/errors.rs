use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    /// `"{kind} not found with id: {id}"`, e.g. `Insurance Plan not found with id: 999`.
    pub fn not_found(kind: &str, id: i64) -> Self {
        Self::NotFound(format!("{} not found with id: {}", kind, id))
    }

    /// True when the caller sent something unusable, as opposed to a store failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)))
    }
}

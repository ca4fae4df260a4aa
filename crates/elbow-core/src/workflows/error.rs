use super::validation::ValidationError;
use crate::core::error::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Invalid session input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to export sweep: {0}")]
    Export(#[from] csv::Error),
}

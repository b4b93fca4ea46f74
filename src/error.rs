use thiserror::Error;

use crate::models::Field;

/// Raised when the answers are not complete enough to build a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please complete all required fields: {0} is missing")]
    MissingField(Field),

    #[error("please complete all required fields: {field} has an invalid value '{value}'")]
    InvalidNumber { field: Field, value: String },
}

impl ValidationError {
    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::InvalidNumber { field, .. } => *field,
        }
    }
}

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;

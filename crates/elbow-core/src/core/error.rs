use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid model parameter '{name}': {value} (must be a positive, finite number)")]
    InvalidParameter { name: &'static str, value: f64 },
}

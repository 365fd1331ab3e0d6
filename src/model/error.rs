//! Form validation errors

use thiserror::Error;

/// Reasons a submitted form is rejected before anything is sent
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Category left blank
    #[error("Category is required")]
    MissingCategory,

    /// Amount is not a number
    #[error("Amount '{0}' is not a number")]
    InvalidAmount(String),

    /// Amount parsed to NaN or infinity
    #[error("Amount must be a finite number")]
    NonFiniteAmount,

    /// Amount below zero
    #[error("Amount must not be negative (got {0})")]
    NegativeAmount(f64),

    /// Date is not `YYYY-MM-DD`
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

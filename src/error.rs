use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// A single rejected input at the engine boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: String, value: f64 },

    #[error("principal must be greater than zero, got {0}")]
    NonPositivePrincipal(f64),

    #[error("{field} must be in [0, 100) percent, got {value}")]
    RateOutOfRange { field: String, value: f64 },

    #[error("{field} must be a whole number of months from 1 to {max}, got {value}")]
    InvalidTerm { field: String, value: f64, max: u32 },

    #[error("{field} cannot be negative, got {value}")]
    Negative { field: String, value: f64 },

    #[error("extra payment {extra_payment} exceeds principal {principal}")]
    ExtraPaymentExceedsPrincipal { extra_payment: f64, principal: f64 },
}

/// Every rejected input from one validation pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub(crate) fn push(&mut self, err: ValidationError) {
        self.0.push(err);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid input(s)", self.0.len())?;
        for err in &self.0 {
            write!(f, "; {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DateError {
    #[error("payment {month} falls outside the supported calendar range (from {start})")]
    OutOfRange { start: NaiveDate, month: u32 },
}

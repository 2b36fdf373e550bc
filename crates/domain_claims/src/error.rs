//! Claims domain errors

use chrono::NaiveDate;
use thiserror::Error;

use core_kernel::{MoneyError, TemporalError};
use crate::claim::ClaimStatus;

/// Errors that can occur in the claims domain
///
/// Every guard runs before the aggregate is touched, so an error always
/// leaves the claim exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Claim cannot be {operation}: status is {actual}, expected {required}")]
    IllegalStateTransition {
        operation: &'static str,
        actual: ClaimStatus,
        required: ClaimStatus,
    },

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error("Invalid policy period: {0}")]
    InvalidPolicyPeriod(#[from] TemporalError),

    #[error("Invalid claim number: {0}")]
    InvalidClaimNumber(String),

    #[error("Claim numbers exhausted for {0}")]
    ClaimNumberExhausted(NaiveDate),
}

impl ClaimError {
    /// Returns true for a lifecycle method called from the wrong status
    pub fn is_illegal_transition(&self) -> bool {
        matches!(self, ClaimError::IllegalStateTransition { .. })
    }

    /// Returns true for a cross-currency comparison or operation
    pub fn is_currency_mismatch(&self) -> bool {
        matches!(self, ClaimError::Money(MoneyError::CurrencyMismatch { .. }))
    }
}

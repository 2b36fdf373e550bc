//! Application errors

use thiserror::Error;
use validator::ValidationErrors;

use core_kernel::{MoneyError, PortError};
use domain_claims::ClaimError;

/// Errors surfaced by the claims application service
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Claim not found: {0}")]
    NotFound(String),

    #[error("Invalid command: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Domain(#[from] ClaimError),

    #[error(transparent)]
    Port(#[from] PortError),
}

impl From<MoneyError> for ApplicationError {
    fn from(err: MoneyError) -> Self {
        ApplicationError::Domain(err.into())
    }
}

impl ApplicationError {
    /// Returns true if the claim does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            ApplicationError::NotFound(_) => true,
            ApplicationError::Port(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if the write lost a race and may be retried on fresh state
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApplicationError::Port(err) if err.is_conflict())
    }

    /// Returns true if a lifecycle operation was called in the wrong status
    pub fn is_illegal_transition(&self) -> bool {
        matches!(self, ApplicationError::Domain(err) if err.is_illegal_transition())
    }
}

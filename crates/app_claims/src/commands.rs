//! Commands accepted by the claims application service
//!
//! Commands are validated declaratively before any domain object is built.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use core_kernel::Currency;
use domain_claims::DocumentType;

/// Files a new claim against a policy snapshot
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_policy_window"))]
pub struct CreateClaimCommand {
    #[validate(length(min = 1, max = 64))]
    pub policy_holder_id: String,
    pub incident_date: DateTime<Utc>,
    #[validate(length(min = 1, max = 4000))]
    pub incident_description: String,

    #[validate(length(min = 1, max = 64))]
    pub policy_number: String,
    #[validate(length(min = 1, max = 64))]
    pub policy_type: String,
    pub policy_start_date: NaiveDate,
    pub policy_end_date: NaiveDate,
    #[validate(custom(function = "non_negative"))]
    pub coverage_limit: Decimal,
    pub coverage_currency: Currency,
    #[validate(custom(function = "non_negative"))]
    pub deductible_amount: Decimal,
    pub deductible_currency: Currency,

    #[validate(custom(function = "non_negative"))]
    pub claim_amount: Decimal,
    pub claim_currency: Currency,
}

/// Attaches an uploaded document to a claim
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddDocumentCommand {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    #[validate(length(min = 1, max = 255))]
    pub content_type: String,
    pub document_type: DocumentType,
    #[validate(length(min = 1, max = 64))]
    pub uploaded_by: String,
}

fn non_negative(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}

fn validate_policy_window(command: &CreateClaimCommand) -> Result<(), ValidationError> {
    if command.policy_start_date > command.policy_end_date {
        return Err(ValidationError::new("policy_period_inverted"));
    }
    Ok(())
}

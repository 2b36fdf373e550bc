//! Claim domain services
//!
//! Creation and coverage validation of claims. The service holds no claim
//! state; it builds claims, evaluates them against their policy snapshot and
//! drives invalid claims to rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use core_kernel::{Entity, Money};
use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::numbering::{ClaimNumber, ClaimNumberSequence, DailyClaimNumberSequence};
use crate::policy::PolicyDetails;

/// Rejection reason recorded when a new claim fails validation
pub const DEFAULT_REJECTION_MESSAGE: &str =
    "Claim validation failed: policy not active or claim amount exceeds coverage";

/// A validation rule a claim failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFailure {
    /// Policy not in force on the incident date
    PolicyNotActive,
    /// Claimed amount above the policy's coverage limit
    ExceedsCoverageLimit,
}

/// Outcome of checking a claim against its policy snapshot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClaimAssessment {
    pub failures: Vec<ValidationFailure>,
}

impl ClaimAssessment {
    /// Returns true if every rule passed
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Service for creating and validating claims
///
/// Cloning is cheap and clones share the claim number sequence.
#[derive(Clone)]
pub struct ClaimDomainService {
    numbers: Arc<dyn ClaimNumberSequence>,
    rejection_message: String,
}

impl Default for ClaimDomainService {
    fn default() -> Self {
        Self::new(Arc::new(DailyClaimNumberSequence::new()))
    }
}

impl ClaimDomainService {
    /// Creates a service drawing claim numbers from `numbers`
    pub fn new(numbers: Arc<dyn ClaimNumberSequence>) -> Self {
        Self {
            numbers,
            rejection_message: DEFAULT_REJECTION_MESSAGE.to_string(),
        }
    }

    /// Overrides the reason recorded on claims rejected at intake
    pub fn with_rejection_message(mut self, message: impl Into<String>) -> Self {
        self.rejection_message = message.into();
        self
    }

    pub fn rejection_message(&self) -> &str {
        &self.rejection_message
    }

    /// Skips numbers already issued elsewhere for that day
    pub fn resume_numbering(&self, last_issued: &ClaimNumber) {
        self.numbers.resume_from(last_issued);
    }

    /// Creates a new SUBMITTED claim numbered for today's date
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::ClaimNumberExhausted` if no claim number is left
    /// for today
    pub fn create_claim(
        &self,
        policy_holder_id: impl Into<String>,
        incident_date: DateTime<Utc>,
        incident_description: impl Into<String>,
        policy_details: PolicyDetails,
        claim_amount: Money,
    ) -> Result<Claim, ClaimError> {
        let claim_number = self.numbers.next(Utc::now().date_naive())?;

        Ok(Claim::create(
            claim_number,
            policy_holder_id,
            incident_date,
            incident_description,
            policy_details,
            claim_amount,
        ))
    }

    /// Checks a claim against its policy snapshot, reporting every failed rule
    ///
    /// # Errors
    ///
    /// Returns a currency mismatch if the claim amount and the coverage
    /// limit are in different currencies
    pub fn assess_claim(&self, claim: &Claim) -> Result<ClaimAssessment, ClaimError> {
        let policy = claim.policy_details();
        let mut failures = Vec::new();

        if !policy.is_active(claim.incident_date().date_naive()) {
            failures.push(ValidationFailure::PolicyNotActive);
        }

        if claim.claim_amount().is_greater_than(&policy.coverage_limit())? {
            failures.push(ValidationFailure::ExceedsCoverageLimit);
        }

        debug!(
            claim_number = %claim.claim_number(),
            ?failures,
            "Claim assessed"
        );

        Ok(ClaimAssessment { failures })
    }

    /// Returns true if the claim passes every coverage rule
    pub fn validate_claim(&self, claim: &Claim) -> Result<bool, ClaimError> {
        Ok(self.assess_claim(claim)?.is_valid())
    }

    /// Rejects a claim that has not yet been processed
    ///
    /// Rejection requires PROCESSING, so a SUBMITTED claim is moved through
    /// `process` first. A claim already under processing is rejected
    /// directly.
    pub fn reject_invalid(
        &self,
        claim: &mut Claim,
        reason: impl Into<String>,
    ) -> Result<(), ClaimError> {
        if claim.status() == ClaimStatus::Submitted {
            claim.process()?;
        }
        claim.reject(reason)?;

        debug!(claim_id = %claim.id(), "Claim rejected at intake");
        Ok(())
    }

    /// Creates a claim and immediately validates it
    ///
    /// A claim that fails validation comes back REJECTED with the
    /// configured rejection message, having passed through PROCESSING.
    pub fn create_validated_claim(
        &self,
        policy_holder_id: impl Into<String>,
        incident_date: DateTime<Utc>,
        incident_description: impl Into<String>,
        policy_details: PolicyDetails,
        claim_amount: Money,
    ) -> Result<(Claim, ClaimAssessment), ClaimError> {
        let mut claim = self.create_claim(
            policy_holder_id,
            incident_date,
            incident_description,
            policy_details,
            claim_amount,
        )?;

        let assessment = self.assess_claim(&claim)?;
        if !assessment.is_valid() {
            self.reject_invalid(&mut claim, self.rejection_message.clone())?;
        }

        Ok((claim, assessment))
    }
}

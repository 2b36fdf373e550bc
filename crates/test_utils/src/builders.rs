//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{AggregateRoot, Currency, Money};
use rust_decimal::Decimal;
use domain_claims::{Claim, ClaimDomainService, ClaimStatus, Document, PolicyDetails};

use crate::fixtures::{ClaimFixtures, MoneyFixtures, StringFixtures, TemporalFixtures};

/// Builder for constructing policy snapshots
pub struct TestPolicyBuilder {
    policy_number: String,
    policy_type: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    coverage_limit: Money,
    deductible: Money,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            policy_number: StringFixtures::policy_number().to_string(),
            policy_type: StringFixtures::policy_type().to_string(),
            start_date: TemporalFixtures::policy_start(),
            end_date: TemporalFixtures::policy_end(),
            coverage_limit: MoneyFixtures::usd_coverage_limit(),
            deductible: MoneyFixtures::usd_deductible(),
        }
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = number.into();
        self
    }

    /// Sets the coverage window
    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Sets the coverage limit
    pub fn with_coverage_limit(mut self, limit: Money) -> Self {
        self.coverage_limit = limit;
        self
    }

    /// Builds the policy snapshot
    pub fn build(self) -> PolicyDetails {
        PolicyDetails::new(
            self.policy_number,
            self.policy_type,
            self.start_date,
            self.end_date,
            self.coverage_limit,
            self.deductible,
        )
        .unwrap()
    }
}

/// Builder for claims in any lifecycle status
///
/// Statuses the aggregate cannot reach by itself (PAYMENT_PENDING, PAID,
/// CLOSED) are produced by rewriting the status of an approved claim's
/// snapshot, the same way a store adapter would rehydrate one.
pub struct TestClaimBuilder {
    service: ClaimDomainService,
    policy_holder_id: String,
    incident_date: DateTime<Utc>,
    incident_description: String,
    policy_details: PolicyDetails,
    claim_amount: Money,
    status: ClaimStatus,
    documents: Vec<Document>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            service: ClaimDomainService::default(),
            policy_holder_id: StringFixtures::policy_holder_id().to_string(),
            incident_date: TemporalFixtures::incident_in_cover(),
            incident_description: StringFixtures::incident_description().to_string(),
            policy_details: ClaimFixtures::active_policy(),
            claim_amount: MoneyFixtures::usd_claim(),
            status: ClaimStatus::Submitted,
            documents: Vec::new(),
        }
    }

    /// Numbers claims from the given service's sequence
    pub fn with_service(mut self, service: ClaimDomainService) -> Self {
        self.service = service;
        self
    }

    /// Sets the policyholder
    pub fn with_policy_holder_id(mut self, id: impl Into<String>) -> Self {
        self.policy_holder_id = id.into();
        self
    }

    /// Sets the incident date
    pub fn with_incident_date(mut self, date: DateTime<Utc>) -> Self {
        self.incident_date = date;
        self
    }

    /// Sets the policy snapshot
    pub fn with_policy(mut self, policy: PolicyDetails) -> Self {
        self.policy_details = policy;
        self
    }

    /// Sets the claimed amount
    pub fn with_claim_amount(mut self, amount: Money) -> Self {
        self.claim_amount = amount;
        self
    }

    /// Sets the target status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Attaches a document
    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Builds the claim with every event from its history still pending
    ///
    /// Rehydrated statuses start with an empty event buffer.
    pub fn build_with_events(self) -> Claim {
        let mut claim = self
            .service
            .create_claim(
                self.policy_holder_id,
                self.incident_date,
                self.incident_description,
                self.policy_details,
                self.claim_amount,
            )
            .unwrap();

        for document in self.documents {
            claim.add_document(document);
        }

        match self.status {
            ClaimStatus::Submitted => {}
            ClaimStatus::Processing => claim.process().unwrap(),
            ClaimStatus::Approved => {
                claim.process().unwrap();
                claim.approve(claim.claim_amount()).unwrap();
            }
            ClaimStatus::Rejected => {
                claim.process().unwrap();
                claim.reject("Not covered").unwrap();
            }
            status @ (ClaimStatus::PaymentPending | ClaimStatus::Paid | ClaimStatus::Closed) => {
                claim.process().unwrap();
                claim.approve(claim.claim_amount()).unwrap();
                claim = with_status(&claim, status);
            }
        }

        claim
    }

    /// Builds the claim as a store would return it: no pending events
    pub fn build(self) -> Claim {
        let mut claim = self.build_with_events();
        claim.take_events();
        claim
    }
}

/// Rehydrates `claim` with a different status
pub fn with_status(claim: &Claim, status: ClaimStatus) -> Claim {
    let mut snapshot = serde_json::to_value(claim).unwrap();
    snapshot["status"] = serde_json::to_value(status).unwrap();
    serde_json::from_value(snapshot).unwrap()
}

/// Convenience for a USD amount in whole dollars
pub fn usd(amount: i64) -> Money {
    Money::of(Decimal::from(amount), Currency::USD).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_builder_defaults() {
        let claim = TestClaimBuilder::new().build();

        assert_eq!(claim.status(), ClaimStatus::Submitted);
        assert_eq!(claim.policy_holder_id(), StringFixtures::policy_holder_id());
        assert!(claim.pending_events().is_empty());
    }

    #[test]
    fn test_claim_builder_reaches_every_status() {
        for status in [
            ClaimStatus::Submitted,
            ClaimStatus::Processing,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
            ClaimStatus::PaymentPending,
            ClaimStatus::Paid,
            ClaimStatus::Closed,
        ] {
            let claim = TestClaimBuilder::new().with_status(status).build();
            assert_eq!(claim.status(), status);
        }
    }

    #[test]
    fn test_build_with_events_keeps_history() {
        let claim = TestClaimBuilder::new()
            .with_status(ClaimStatus::Approved)
            .build_with_events();

        assert_eq!(claim.pending_events().len(), 3);
    }

    #[test]
    fn test_policy_builder_overrides() {
        let policy = TestPolicyBuilder::new()
            .with_coverage_limit(usd(250))
            .build();

        assert_eq!(policy.coverage_limit(), usd(250));
    }
}

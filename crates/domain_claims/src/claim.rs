//! Claim Aggregate Root
//!
//! The Claim aggregate is the consistency boundary for a single insurance
//! claim. It owns the policy snapshot, the attached documents and the
//! pending domain events.
//!
//! # Invariants
//!
//! - The claim number is assigned at creation and never changes
//! - Status only changes through `process`, `approve` and `reject`
//! - A rejection reason is present exactly when the status is REJECTED
//! - The processing date is set once processing starts and never cleared
//! - Documents are only ever appended

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AggregateRoot, ClaimId, Entity, EventBuffer, Money, MoneyError};
use crate::document::Document;
use crate::error::ClaimError;
use crate::events::ClaimEvent;
use crate::numbering::ClaimNumber;
use crate::policy::PolicyDetails;

/// Claim lifecycle states
///
/// PAYMENT_PENDING, PAID and CLOSED are reached through payment and
/// archival collaborators; the aggregate itself only drives the
/// SUBMITTED -> PROCESSING -> APPROVED/REJECTED part of the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// Filed, awaiting processing
    Submitted,
    /// Being assessed by an adjuster
    Processing,
    /// Approved for payment
    Approved,
    /// Rejected
    Rejected,
    /// Approved and queued for payment
    PaymentPending,
    /// Paid out
    Paid,
    /// Archived
    Closed,
}

impl ClaimStatus {
    /// Wire and display name, e.g. `PAYMENT_PENDING`
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "SUBMITTED",
            ClaimStatus::Processing => "PROCESSING",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Rejected => "REJECTED",
            ClaimStatus::PaymentPending => "PAYMENT_PENDING",
            ClaimStatus::Paid => "PAID",
            ClaimStatus::Closed => "CLOSED",
        }
    }

    /// Returns true if no further lifecycle step is expected
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            ClaimStatus::Rejected | ClaimStatus::Paid | ClaimStatus::Closed
        )
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim against a policy
///
/// # State Machine
///
/// - SUBMITTED -> PROCESSING (via `process`)
/// - PROCESSING -> APPROVED (via `approve`)
/// - PROCESSING -> REJECTED (via `reject`)
///
/// Documents may be attached in any status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    id: ClaimId,
    /// Human-readable claim number
    claim_number: ClaimNumber,
    /// Policyholder who filed the claim
    policy_holder_id: String,
    /// When the incident happened
    incident_date: DateTime<Utc>,
    /// What happened
    incident_description: String,
    /// Policy terms at intake
    policy_details: PolicyDetails,
    /// Supporting documents, in upload order
    documents: Vec<Document>,
    /// Claimed amount, replaced by the approved amount on approval
    claim_amount: Money,
    /// Current lifecycle state
    status: ClaimStatus,
    /// Why the claim was rejected
    rejection_reason: Option<String>,
    /// When the claim was filed
    submission_date: DateTime<Utc>,
    /// When processing started
    processing_date: Option<DateTime<Utc>>,
    /// Version for optimistic concurrency
    version: u64,
    /// Domain events to be published
    #[serde(skip)]
    events: EventBuffer<ClaimEvent>,
}

impl Claim {
    /// Files a new claim in SUBMITTED status and queues `ClaimCreated`
    pub fn create(
        claim_number: ClaimNumber,
        policy_holder_id: impl Into<String>,
        incident_date: DateTime<Utc>,
        incident_description: impl Into<String>,
        policy_details: PolicyDetails,
        claim_amount: Money,
    ) -> Self {
        let now = Utc::now();
        let id = ClaimId::new_v7();
        let policy_holder_id = policy_holder_id.into();

        let mut events = EventBuffer::new();
        events.record(ClaimEvent::ClaimCreated {
            claim_id: id,
            claim_number: claim_number.clone(),
            policy_holder_id: policy_holder_id.clone(),
            submission_date: now,
            occurred_at: now,
        });

        Self {
            id,
            claim_number,
            policy_holder_id,
            incident_date,
            incident_description: incident_description.into(),
            policy_details,
            documents: Vec::new(),
            claim_amount,
            status: ClaimStatus::Submitted,
            rejection_reason: None,
            submission_date: now,
            processing_date: None,
            version: 0,
            events,
        }
    }

    pub fn claim_number(&self) -> &ClaimNumber {
        &self.claim_number
    }

    pub fn policy_holder_id(&self) -> &str {
        &self.policy_holder_id
    }

    pub fn incident_date(&self) -> DateTime<Utc> {
        self.incident_date
    }

    pub fn incident_description(&self) -> &str {
        &self.incident_description
    }

    pub fn policy_details(&self) -> &PolicyDetails {
        &self.policy_details
    }

    /// Attached documents, oldest first
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn claim_amount(&self) -> Money {
        self.claim_amount
    }

    pub fn status(&self) -> ClaimStatus {
        self.status
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    pub fn submission_date(&self) -> DateTime<Utc> {
        self.submission_date
    }

    pub fn processing_date(&self) -> Option<DateTime<Utc>> {
        self.processing_date
    }

    /// Number of successful writes of this claim
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Called by store adapters once a write of this version has succeeded
    pub fn record_persisted(&mut self) {
        self.version += 1;
    }

    /// Starts processing a submitted claim
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::IllegalStateTransition` unless the claim is SUBMITTED
    pub fn process(&mut self) -> Result<(), ClaimError> {
        self.ensure_status("processed", ClaimStatus::Submitted)?;

        let now = Utc::now();
        self.status = ClaimStatus::Processing;
        self.processing_date = Some(now);

        self.events.record(ClaimEvent::ClaimProcessed {
            claim_id: self.id,
            claim_number: self.claim_number.clone(),
            processing_date: now,
            occurred_at: now,
        });

        Ok(())
    }

    /// Approves a claim under processing, replacing the claimed amount
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::IllegalStateTransition` unless the claim is
    /// PROCESSING, or a currency mismatch if `approved_amount` is not in the
    /// claim's currency
    pub fn approve(&mut self, approved_amount: Money) -> Result<(), ClaimError> {
        self.ensure_status("approved", ClaimStatus::Processing)?;
        if approved_amount.currency() != self.claim_amount.currency() {
            return Err(MoneyError::CurrencyMismatch {
                left: self.claim_amount.currency(),
                right: approved_amount.currency(),
            }
            .into());
        }

        self.status = ClaimStatus::Approved;
        self.claim_amount = approved_amount;

        self.events.record(ClaimEvent::ClaimApproved {
            claim_id: self.id,
            claim_number: self.claim_number.clone(),
            approved_amount,
            occurred_at: Utc::now(),
        });

        Ok(())
    }

    /// Rejects a claim under processing
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::IllegalStateTransition` unless the claim is PROCESSING
    pub fn reject(&mut self, reason: impl Into<String>) -> Result<(), ClaimError> {
        self.ensure_status("rejected", ClaimStatus::Processing)?;

        let now = Utc::now();
        let reason = reason.into();
        self.status = ClaimStatus::Rejected;
        self.rejection_reason = Some(reason.clone());

        self.events.record(ClaimEvent::ClaimRejected {
            claim_id: self.id,
            claim_number: self.claim_number.clone(),
            rejection_reason: reason,
            rejection_date: now,
            occurred_at: now,
        });

        Ok(())
    }

    /// Attaches a document; allowed in every status
    pub fn add_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    fn ensure_status(
        &self,
        operation: &'static str,
        required: ClaimStatus,
    ) -> Result<(), ClaimError> {
        if self.status != required {
            return Err(ClaimError::IllegalStateTransition {
                operation,
                actual: self.status,
                required,
            });
        }
        Ok(())
    }
}

impl Entity for Claim {
    type Id = ClaimId;

    fn id(&self) -> ClaimId {
        self.id
    }
}

impl AggregateRoot for Claim {
    type Event = ClaimEvent;

    fn pending_events(&self) -> &[ClaimEvent] {
        self.events.pending()
    }

    fn take_events(&mut self) -> Vec<ClaimEvent> {
        self.events.drain()
    }
}

impl PartialEq for Claim {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Claim {}

//! Domain events for the claim aggregate
//!
//! Events are queued on the claim by its lifecycle methods and drained by the
//! application layer once the claim has been saved. They are used for:
//! - Notifying policyholders and adjusters
//! - Feeding payment and reporting systems
//! - Audit trails

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, DomainEvent, Money};
use crate::numbering::ClaimNumber;

/// Domain events emitted by the Claim aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClaimEvent {
    /// Claim has been filed
    ClaimCreated {
        claim_id: ClaimId,
        claim_number: ClaimNumber,
        policy_holder_id: String,
        submission_date: DateTime<Utc>,
        occurred_at: DateTime<Utc>,
    },

    /// Claim has been picked up for processing
    ClaimProcessed {
        claim_id: ClaimId,
        claim_number: ClaimNumber,
        processing_date: DateTime<Utc>,
        occurred_at: DateTime<Utc>,
    },

    /// Claim has been approved for the given amount
    ClaimApproved {
        claim_id: ClaimId,
        claim_number: ClaimNumber,
        approved_amount: Money,
        occurred_at: DateTime<Utc>,
    },

    /// Claim has been rejected
    ClaimRejected {
        claim_id: ClaimId,
        claim_number: ClaimNumber,
        rejection_reason: String,
        rejection_date: DateTime<Utc>,
        occurred_at: DateTime<Utc>,
    },
}

impl ClaimEvent {
    /// Returns the claim ID associated with this event
    pub fn claim_id(&self) -> ClaimId {
        match self {
            ClaimEvent::ClaimCreated { claim_id, .. }
            | ClaimEvent::ClaimProcessed { claim_id, .. }
            | ClaimEvent::ClaimApproved { claim_id, .. }
            | ClaimEvent::ClaimRejected { claim_id, .. } => *claim_id,
        }
    }

    /// Returns the claim number associated with this event
    pub fn claim_number(&self) -> &ClaimNumber {
        match self {
            ClaimEvent::ClaimCreated { claim_number, .. }
            | ClaimEvent::ClaimProcessed { claim_number, .. }
            | ClaimEvent::ClaimApproved { claim_number, .. }
            | ClaimEvent::ClaimRejected { claim_number, .. } => claim_number,
        }
    }
}

impl DomainEvent for ClaimEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ClaimEvent::ClaimCreated { .. } => "ClaimCreated",
            ClaimEvent::ClaimProcessed { .. } => "ClaimProcessed",
            ClaimEvent::ClaimApproved { .. } => "ClaimApproved",
            ClaimEvent::ClaimRejected { .. } => "ClaimRejected",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ClaimEvent::ClaimCreated { occurred_at, .. }
            | ClaimEvent::ClaimProcessed { occurred_at, .. }
            | ClaimEvent::ClaimApproved { occurred_at, .. }
            | ClaimEvent::ClaimRejected { occurred_at, .. } => *occurred_at,
        }
    }
}

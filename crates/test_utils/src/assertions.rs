//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::{AggregateRoot, DomainEvent, Money};
use domain_claims::{Claim, ClaimError, ClaimStatus};

/// Asserts that two Money values are equal in amount and currency
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Money amounts differ: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a claim is in the expected status
pub fn assert_claim_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status(),
        expected,
        "Claim {} is {}, expected {}",
        claim.claim_number(),
        claim.status(),
        expected
    );
}

/// Asserts that the pending events carry the given types, in order
pub fn assert_pending_event_types(claim: &Claim, expected: &[&str]) {
    let actual: Vec<&str> = claim
        .pending_events()
        .iter()
        .map(|event| event.event_type())
        .collect();
    assert_eq!(
        actual, expected,
        "Unexpected pending events on claim {}",
        claim.claim_number()
    );
}

/// Asserts that a lifecycle call failed because of the claim's status
pub fn assert_illegal_transition<T: std::fmt::Debug>(result: Result<T, ClaimError>) {
    match result {
        Err(error) if error.is_illegal_transition() => {}
        other => panic!("Expected an illegal state transition, got {:?}", other),
    }
}

/// Asserts that a claim went through intake rejection
pub fn assert_rejected_with(claim: &Claim, reason: &str) {
    assert_claim_status(claim, ClaimStatus::Rejected);
    assert_eq!(claim.rejection_reason(), Some(reason));
    assert!(
        claim.processing_date().is_some(),
        "Rejected claim {} has no processing date",
        claim.claim_number()
    );
}

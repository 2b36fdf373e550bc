//! Property tests for claim intake

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use app_claims::{ClaimApplicationService, CreateClaimCommand};
use core_kernel::Currency;
use domain_claims::{ClaimDomainService, ClaimStatus};
use infra_memory::{InMemoryClaimRepository, InMemoryEventOutbox};

fn command(claim_cents: i64, incident_day: i64) -> CreateClaimCommand {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let incident = start + chrono::Duration::days(incident_day);
    CreateClaimCommand {
        policy_holder_id: "PH-PROP".to_string(),
        incident_date: Utc.from_utc_datetime(&incident.and_hms_opt(12, 0, 0).unwrap()),
        incident_description: "Generated incident".to_string(),
        policy_number: "POL-PROP".to_string(),
        policy_type: "AUTO".to_string(),
        policy_start_date: start,
        policy_end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        coverage_limit: Decimal::new(1_000_000, 2),
        coverage_currency: Currency::USD,
        deductible_amount: Decimal::ZERO,
        deductible_currency: Currency::USD,
        claim_amount: Decimal::new(claim_cents, 2),
        claim_currency: Currency::USD,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn intake_outcome_matches_coverage(claim_cents in 0i64..2_000_000, incident_day in -30i64..400) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let service = ClaimApplicationService::new(
            Arc::new(InMemoryClaimRepository::new()),
            Arc::new(InMemoryEventOutbox::new()),
            ClaimDomainService::default(),
        );

        let view = runtime
            .block_on(service.create_claim(command(claim_cents, incident_day)))
            .unwrap();

        // 2024 is a leap year: days 0..=365 fall inside the policy window
        let in_window = (0..=365).contains(&incident_day);
        let within_limit = claim_cents <= 1_000_000;
        let expected = if in_window && within_limit {
            ClaimStatus::Submitted
        } else {
            ClaimStatus::Rejected
        };
        prop_assert_eq!(view.status, expected);
    }
}

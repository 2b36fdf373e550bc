//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use core_kernel::{Currency, Money};
use domain_claims::{ClaimStatus, DocumentType, PolicyDetails};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
        Just(Currency::CHF),
        Just(Currency::INR),
        Just(Currency::AUD),
        Just(Currency::CAD),
        Just(Currency::SGD),
        Just(Currency::HKD),
    ]
}

/// Strategy for generating non-negative amounts with cents
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating valid USD Money values
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    amount_strategy().prop_map(|amount| Money::of(amount, Currency::USD).unwrap())
}

/// Strategy for generating valid Money values in any currency
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (amount_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::of(amount, currency).unwrap())
}

/// Strategy for generating every claim status
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Submitted),
        Just(ClaimStatus::Processing),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
        Just(ClaimStatus::PaymentPending),
        Just(ClaimStatus::Paid),
        Just(ClaimStatus::Closed),
    ]
}

/// Strategy for generating document categories
pub fn document_type_strategy() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        Just(DocumentType::IncidentReport),
        Just(DocumentType::PoliceReport),
        Just(DocumentType::MedicalReport),
        Just(DocumentType::WitnessStatement),
        Just(DocumentType::PhotoEvidence),
        Just(DocumentType::Invoice),
        Just(DocumentType::Receipt),
        Just(DocumentType::Estimation),
        Just(DocumentType::Other),
    ]
}

/// Strategy for generating dates between 2000 and roughly 2054
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000i64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Strategy for generating incident timestamps
pub fn incident_date_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (date_strategy(), 0u32..86_400u32).prop_map(|(date, secs)| {
        Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap()) + Duration::seconds(secs as i64)
    })
}

/// Strategy for generating USD policy snapshots with a valid window
pub fn policy_details_strategy() -> impl Strategy<Value = PolicyDetails> {
    (date_strategy(), 0i64..3_650i64, usd_money_strategy()).prop_map(|(start, length, limit)| {
        PolicyDetails::new(
            "POL-GEN",
            "AUTO",
            start,
            start + Duration::days(length),
            limit,
            Money::zero(Currency::USD),
        )
        .unwrap()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_money_strategy_is_non_negative(money in money_strategy()) {
            prop_assert!(money.amount() >= Decimal::ZERO);
        }

        #[test]
        fn test_policy_window_is_ordered(policy in policy_details_strategy()) {
            prop_assert!(policy.start_date() <= policy.end_date());
        }
    }
}

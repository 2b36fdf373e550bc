//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the claims domain.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{ClaimId, Currency, DateRange, DocumentId, Money};
use domain_claims::{Document, DocumentType, PolicyDetails};
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard coverage limit
    pub fn usd_coverage_limit() -> Money {
        Money::of(dec!(10000.00), Currency::USD).unwrap()
    }

    /// Standard deductible
    pub fn usd_deductible() -> Money {
        Money::of(dec!(500.00), Currency::USD).unwrap()
    }

    /// Claim amount inside the coverage limit
    pub fn usd_claim() -> Money {
        Money::of(dec!(5000.00), Currency::USD).unwrap()
    }

    /// Claim amount above the coverage limit
    pub fn usd_over_limit() -> Money {
        Money::of(dec!(15000.00), Currency::USD).unwrap()
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::of(dec!(100.00), Currency::EUR).unwrap()
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy start date (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Standard policy end date (Dec 31, 2024)
    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// Creates the standard one-year coverage window
    pub fn one_year_policy_period() -> DateRange {
        DateRange::new(Self::policy_start(), Self::policy_end()).unwrap()
    }

    /// Incident inside the coverage window
    pub fn incident_in_cover() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 14, 30, 0).unwrap()
    }

    /// Incident the day after the coverage window ends
    pub fn incident_after_cover() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
    }

    /// Incident the day before the coverage window starts
    pub fn incident_before_cover() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 12, 31, 22, 0, 0).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic claim ID for testing
    pub fn claim_id() -> ClaimId {
        ClaimId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic document ID for testing
    pub fn document_id() -> DocumentId {
        DocumentId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440007").unwrap())
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard policy number
    pub fn policy_number() -> &'static str {
        "POL-2024-000001"
    }

    /// Standard policy type
    pub fn policy_type() -> &'static str {
        "AUTO"
    }

    /// Standard policyholder
    pub fn policy_holder_id() -> &'static str {
        "PH-000042"
    }

    /// Standard incident description
    pub fn incident_description() -> &'static str {
        "Rear-end collision at low speed"
    }
}

/// Fixture for claim collaborators
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Policy snapshot covering 2024 up to USD 10,000
    pub fn active_policy() -> PolicyDetails {
        PolicyDetails::new(
            StringFixtures::policy_number(),
            StringFixtures::policy_type(),
            TemporalFixtures::policy_start(),
            TemporalFixtures::policy_end(),
            MoneyFixtures::usd_coverage_limit(),
            MoneyFixtures::usd_deductible(),
        )
        .unwrap()
    }

    /// A police report stored in object storage
    pub fn police_report() -> Document {
        Document::new(
            IdFixtures::document_id(),
            "police-report.pdf",
            "application/pdf",
            "s3://claims-documents/police-report.pdf",
            DocumentType::PoliceReport,
            StringFixtures::policy_holder_id(),
        )
    }
}

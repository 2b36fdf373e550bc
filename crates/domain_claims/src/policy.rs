//! Policy snapshot embedded in a claim
//!
//! A claim keeps its own copy of the policy terms as they were at intake.
//! Later changes to the policy record do not affect claims already filed.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DateRange, Money};
use crate::error::ClaimError;

/// Policy terms relevant to claim validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDetails {
    policy_number: String,
    policy_type: String,
    period: DateRange,
    coverage_limit: Money,
    deductible: Money,
}

impl PolicyDetails {
    /// Creates a policy snapshot
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::InvalidPolicyPeriod` if `start_date` is after
    /// `end_date`
    pub fn new(
        policy_number: impl Into<String>,
        policy_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        coverage_limit: Money,
        deductible: Money,
    ) -> Result<Self, ClaimError> {
        Ok(Self {
            policy_number: policy_number.into(),
            policy_type: policy_type.into(),
            period: DateRange::new(start_date, end_date)?,
            coverage_limit,
            deductible,
        })
    }

    pub fn policy_number(&self) -> &str {
        &self.policy_number
    }

    pub fn policy_type(&self) -> &str {
        &self.policy_type
    }

    pub fn start_date(&self) -> NaiveDate {
        self.period.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.period.end()
    }

    /// Maximum payable amount for a claim under this policy
    pub fn coverage_limit(&self) -> Money {
        self.coverage_limit
    }

    /// Amount borne by the policyholder; carried but not applied here
    pub fn deductible(&self) -> Money {
        self.deductible
    }

    /// Returns true if the policy was in force on `date`, both ends inclusive
    pub fn is_active(&self, date: NaiveDate) -> bool {
        self.period.contains(date)
    }

    /// Returns true if the policy is in force today (UTC)
    pub fn is_active_today(&self) -> bool {
        self.is_active(Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy(start: NaiveDate, end: NaiveDate) -> Result<PolicyDetails, ClaimError> {
        PolicyDetails::new(
            "POL-1001",
            "AUTO",
            start,
            end,
            Money::of(dec!(10000), Currency::USD).unwrap(),
            Money::of(dec!(500), Currency::USD).unwrap(),
        )
    }

    #[test]
    fn test_is_active_includes_both_boundaries() {
        let p = policy(date(2024, 1, 1), date(2024, 12, 31)).unwrap();

        assert!(p.is_active(date(2024, 1, 1)));
        assert!(p.is_active(date(2024, 6, 1)));
        assert!(p.is_active(date(2024, 12, 31)));
        assert!(!p.is_active(date(2023, 12, 31)));
        assert!(!p.is_active(date(2025, 1, 1)));
    }

    #[test]
    fn test_start_after_end_rejected() {
        let result = policy(date(2025, 1, 1), date(2024, 1, 1));
        assert!(matches!(result, Err(ClaimError::InvalidPolicyPeriod(_))));
    }

    #[test]
    fn test_accessors() {
        let p = policy(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert_eq!(p.policy_number(), "POL-1001");
        assert_eq!(p.policy_type(), "AUTO");
        assert_eq!(p.start_date(), date(2024, 1, 1));
        assert_eq!(p.end_date(), date(2024, 12, 31));
        assert_eq!(p.coverage_limit().amount(), dec!(10000));
        assert_eq!(p.deductible().amount(), dec!(500));
    }
}

//! Calendar date ranges
//!
//! Policy windows are expressed in whole calendar days and are inclusive at
//! both ends: a policy running 2024-01-01..2024-12-31 covers incidents on
//! both of those dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to temporal values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// An inclusive range of calendar dates where `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = TemporalError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a range, rejecting a start date after the end date
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// First covered day
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last covered day
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls within the range, boundaries included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();

        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 12, 31)));
        assert!(!range.contains(date(2023, 12, 31)));
        assert!(!range.contains(date(2025, 1, 1)));
    }

    #[test]
    fn test_single_day_range() {
        let day = date(2024, 2, 29);
        let range = DateRange::new(day, day).unwrap();
        assert!(range.contains(day));
        assert!(!range.contains(day.succ_opt().unwrap()));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = DateRange::new(date(2024, 12, 31), date(2024, 1, 1));
        assert!(matches!(result, Err(TemporalError::InvalidPeriod { .. })));
    }

    #[test]
    fn test_deserialize_validates_order() {
        let json = r#"{"start":"2024-06-01","end":"2024-01-01"}"#;
        assert!(serde_json::from_str::<DateRange>(json).is_err());
    }
}

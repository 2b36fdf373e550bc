//! Human-readable claim numbers
//!
//! Claim numbers have the form `CLM-YYYYMMDD-NNNNN`: the filing date followed
//! by a five-digit sequence that restarts at 00001 every day. Numbers are
//! allocated from a monotonic per-day counter, so two claims filed on the
//! same day never share a number and numbers sort by filing date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use crate::error::ClaimError;

const PREFIX: &str = "CLM";
const DATE_FORMAT: &str = "%Y%m%d";

/// Highest sequence that fits in five digits
pub const MAX_DAILY_SEQUENCE: u32 = 99_999;

/// A claim number such as `CLM-20240601-00042`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClaimNumber {
    date: NaiveDate,
    sequence: u32,
}

impl ClaimNumber {
    /// Builds a claim number from its parts
    pub fn new(date: NaiveDate, sequence: u32) -> Result<Self, ClaimError> {
        if sequence > MAX_DAILY_SEQUENCE {
            return Err(ClaimError::ClaimNumberExhausted(date));
        }
        Ok(Self { date, sequence })
    }

    /// Filing date encoded in the number
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Position within the filing day
    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for ClaimNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{:05}",
            PREFIX,
            self.date.format(DATE_FORMAT),
            self.sequence
        )
    }
}

impl FromStr for ClaimNumber {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClaimError::InvalidClaimNumber(s.to_string());

        let rest = s
            .strip_prefix(PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or_else(invalid)?;
        let (date_part, sequence_part) = rest.split_once('-').ok_or_else(invalid)?;

        let all_digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !all_digits(date_part, 8) || !all_digits(sequence_part, 5) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|_| invalid())?;
        let sequence = sequence_part.parse().map_err(|_| invalid())?;

        Ok(Self { date, sequence })
    }
}

impl TryFrom<String> for ClaimNumber {
    type Error = ClaimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClaimNumber> for String {
    fn from(number: ClaimNumber) -> Self {
        number.to_string()
    }
}

/// Source of unique claim numbers
pub trait ClaimNumberSequence: Send + Sync {
    /// Allocates the next number for a claim filed on `date`
    fn next(&self, date: NaiveDate) -> Result<ClaimNumber, ClaimError>;

    /// Ensures later allocations on that day come after `last_issued`
    fn resume_from(&self, last_issued: &ClaimNumber);
}

/// In-process per-day counter
///
/// Several processes may write to one store, so callers seed it with
/// [`resume_from`](ClaimNumberSequence::resume_from) from the highest number
/// persisted for the day before allocating.
#[derive(Debug, Default)]
pub struct DailyClaimNumberSequence {
    counters: Mutex<HashMap<NaiveDate, u32>>,
}

impl DailyClaimNumberSequence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClaimNumberSequence for DailyClaimNumberSequence {
    fn next(&self, date: NaiveDate) -> Result<ClaimNumber, ClaimError> {
        let mut counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        let counter = counters.entry(date).or_insert(0);
        if *counter >= MAX_DAILY_SEQUENCE {
            return Err(ClaimError::ClaimNumberExhausted(date));
        }
        *counter += 1;
        ClaimNumber::new(date, *counter)
    }

    fn resume_from(&self, last_issued: &ClaimNumber) {
        let mut counters = self.counters.lock().unwrap_or_else(PoisonError::into_inner);
        let counter = counters.entry(last_issued.date()).or_insert(0);
        *counter = (*counter).max(last_issued.sequence());
    }
}

//! Money types with precise decimal arithmetic
//!
//! Claim amounts, coverage limits and deductibles are all non-negative
//! monetary values. Every comparison or arithmetic operation between two
//! values requires the same currency; a mismatch is reported as an error
//! and is never coerced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Internal precision used for stored amounts
const AMOUNT_SCALE: u32 = 4;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CHF,
    INR,
    AUD,
    CAD,
    SGD,
    HKD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::INR => "₹",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
            Currency::SGD => "S$",
            Currency::HKD => "HK$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::INR => "INR",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::SGD => "SGD",
            Currency::HKD => "HKD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {left} and {right}")]
    CurrencyMismatch { left: Currency, right: Currency },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A non-negative monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

/// Wire shape of [`Money`]; deserialization is funnelled through [`Money::of`]
#[derive(Serialize, Deserialize)]
struct MoneyRepr {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = MoneyError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Money::of(repr.amount, repr.currency)
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        MoneyRepr {
            amount: money.amount,
            currency: money.currency,
        }
    }
}

impl Money {
    /// Creates a Money value, rejecting negative amounts
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if `amount` is below zero
    pub fn of(amount: Decimal, currency: Currency) -> Result<Self, MoneyError> {
        if amount < Decimal::ZERO {
            return Err(MoneyError::InvalidAmount(format!(
                "{} {} is negative",
                amount, currency
            )));
        }
        Ok(Self {
            amount: amount.round_dp(AMOUNT_SCALE),
            currency,
        })
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Compares two amounts of the same currency
    pub fn compare(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Returns true if this amount is strictly greater than `other`
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` when the currencies differ,
    /// regardless of the amounts involved.
    pub fn is_greater_than(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Checked addition
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` when the currencies differ, or
    /// `MoneyError::InvalidAmount` when the sum does not fit in a `Decimal`
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let sum = self.amount.checked_add(other.amount).ok_or_else(|| {
            MoneyError::InvalidAmount(format!("{} + {} overflows", self, other))
        })?;
        Money::of(sum, self.currency)
    }

    /// Checked subtraction; the result must stay non-negative
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let difference = self.amount.checked_sub(other.amount).ok_or_else(|| {
            MoneyError::InvalidAmount(format!("{} - {} overflows", self, other))
        })?;
        Money::of(difference, self.currency)
    }

    /// Rounds to the currency's standard decimal places
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: self.amount.round_dp(self.currency.decimal_places()),
            currency: self.currency,
        }
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_creation() {
        let m = Money::of(dec!(100.50), Currency::USD).unwrap();
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = Money::of(dec!(-0.01), Currency::USD);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_zero_is_allowed() {
        let m = Money::of(dec!(0), Currency::EUR).unwrap();
        assert!(m.is_zero());
        assert_eq!(m, Money::zero(Currency::EUR));
    }

    #[test]
    fn test_is_greater_than_is_strict() {
        let a = Money::of(dec!(100), Currency::USD).unwrap();
        let b = Money::of(dec!(100.00), Currency::USD).unwrap();
        let c = Money::of(dec!(99.99), Currency::USD).unwrap();

        assert!(!a.is_greater_than(&b).unwrap());
        assert!(a.is_greater_than(&c).unwrap());
        assert!(!c.is_greater_than(&a).unwrap());
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::of(dec!(100.00), Currency::USD).unwrap();
        let eur = Money::of(dec!(1.00), Currency::EUR).unwrap();

        assert_eq!(
            usd.is_greater_than(&eur),
            Err(MoneyError::CurrencyMismatch {
                left: Currency::USD,
                right: Currency::EUR,
            })
        );
        assert!(usd.checked_add(&eur).is_err());
    }

    #[test]
    fn test_checked_sub_cannot_go_negative() {
        let a = Money::of(dec!(10), Currency::GBP).unwrap();
        let b = Money::of(dec!(25), Currency::GBP).unwrap();

        assert_eq!(b.checked_sub(&a).unwrap().amount(), dec!(15));
        assert!(matches!(a.checked_sub(&b), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_display_uses_currency_precision() {
        let usd = Money::of(dec!(1234.5), Currency::USD).unwrap();
        let jpy = Money::of(dec!(5000), Currency::JPY).unwrap();

        assert_eq!(usd.to_string(), "$ 1234.50");
        assert_eq!(jpy.to_string(), "¥ 5000");
    }

    #[test]
    fn test_deserialize_rejects_negative_amount() {
        let json = r#"{"amount":"-5.00","currency":"USD"}"#;
        let result: Result<Money, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"{"amount":"5.00","currency":"USD"}"#;
        let money: Money = serde_json::from_str(json).unwrap();
        assert_eq!(money.amount(), dec!(5.00));
    }
}

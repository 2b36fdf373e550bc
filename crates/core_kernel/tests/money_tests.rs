//! Integration tests for the Money value type
//!
//! Tests cover construction rules, currency-guarded comparison and
//! arithmetic, and formatting.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_of_creates_money_with_correct_amount() {
        let m = Money::of(dec!(100.50), Currency::USD).unwrap();
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_of_rounds_to_four_decimal_places() {
        let m = Money::of(dec!(100.123456789), Currency::USD).unwrap();
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_of_rejects_negative_amount() {
        let result = Money::of(dec!(-100.00), Currency::USD);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }
}

mod comparison {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_compare_same_currency() {
        let small = Money::of(dec!(5000), Currency::USD).unwrap();
        let large = Money::of(dec!(10000), Currency::USD).unwrap();

        assert_eq!(small.compare(&large).unwrap(), Ordering::Less);
        assert_eq!(large.compare(&small).unwrap(), Ordering::Greater);
        assert_eq!(small.compare(&small).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_is_greater_than_usd_vs_eur_fails_regardless_of_amounts() {
        let pairs = [
            (dec!(0), dec!(0)),
            (dec!(1), dec!(1000)),
            (dec!(1000), dec!(1)),
        ];

        for (usd_amount, eur_amount) in pairs {
            let usd = Money::of(usd_amount, Currency::USD).unwrap();
            let eur = Money::of(eur_amount, Currency::EUR).unwrap();

            assert!(matches!(
                usd.is_greater_than(&eur),
                Err(MoneyError::CurrencyMismatch { .. })
            ));
            assert!(matches!(
                eur.is_greater_than(&usd),
                Err(MoneyError::CurrencyMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_equal_amounts_with_different_scale_are_not_greater() {
        let a = Money::of(dec!(10000), Currency::USD).unwrap();
        let b = Money::of(dec!(10000.0000), Currency::USD).unwrap();
        assert!(!a.is_greater_than(&b).unwrap());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::of(dec!(100.00), Currency::USD).unwrap();
        let b = Money::of(dec!(50.00), Currency::USD).unwrap();
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(150.00));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::of(dec!(100.00), Currency::USD).unwrap();
        let b = Money::of(dec!(50.00), Currency::EUR).unwrap();
        assert_eq!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch {
                left: Currency::USD,
                right: Currency::EUR,
            })
        );
    }

    #[test]
    fn test_checked_sub_to_zero() {
        let a = Money::of(dec!(30.00), Currency::USD).unwrap();
        assert!(a.checked_sub(&a).unwrap().is_zero());
    }

    #[test]
    fn test_checked_add_overflow_is_an_error() {
        let max = Money::of(Decimal::MAX, Currency::USD).unwrap();
        let one = Money::of(dec!(1), Currency::USD).unwrap();

        assert!(matches!(max.checked_add(&one), Err(MoneyError::InvalidAmount(_))));
        assert_eq!(max.checked_add(&Money::zero(Currency::USD)).unwrap(), max);
    }

    #[test]
    fn test_checked_sub_below_zero_is_an_error() {
        let small = Money::of(dec!(1), Currency::USD).unwrap();
        let max = Money::of(Decimal::MAX, Currency::USD).unwrap();

        assert!(matches!(small.checked_sub(&max), Err(MoneyError::InvalidAmount(_))));
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_round_to_currency() {
        let m = Money::of(dec!(10.4567), Currency::USD).unwrap();
        assert_eq!(m.round_to_currency().amount(), dec!(10.46));

        let jpy = Money::of(dec!(10.6), Currency::JPY).unwrap();
        assert_eq!(jpy.round_to_currency().amount(), dec!(11));
    }

    #[test]
    fn test_currency_codes_and_symbols() {
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::GBP.symbol(), "£");
        assert_eq!(Currency::JPY.decimal_places(), 0);
        assert_eq!(Currency::CHF.to_string(), "CHF");
    }
}

//! Unit tests for the Money module
//!
//! Covers construction, premium scaling and display.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::CAD);
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert_eq!(m.currency(), Currency::CAD);
    }

    #[test]
    fn test_non_negative_rejects_negative_amounts() {
        let result = Money::non_negative(dec!(-1), Currency::USD);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        let m = Money::non_negative(Decimal::ZERO, Currency::USD).unwrap();
        assert!(m.is_zero());
    }
}

mod scaling {
    use super::*;

    #[test]
    fn test_scale_by_one_is_identity() {
        let m = Money::new(dec!(2500.50), Currency::EUR);
        assert_eq!(m.scale(dec!(1.0)).unwrap(), m);
    }

    #[test]
    fn test_scale_by_discount_modifier() {
        let m = Money::new(dec!(1000), Currency::USD);
        assert_eq!(m.scale(dec!(0.9)).unwrap().amount(), dec!(900));
    }

    #[test]
    fn test_scale_overflow_is_reported() {
        let m = Money::new(Decimal::MAX, Currency::USD);
        assert_eq!(m.scale(dec!(2)), Err(MoneyError::Overflow));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(Money::new(dec!(10), Currency::GBP).to_string(), "£10.00");
        assert_eq!(Currency::CAD.to_string(), "CAD");
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_scaling_by_positive_modifier_keeps_sign(cents in 0i64..1_000_000_000i64) {
            let m = Money::new(Decimal::new(cents, 2), Currency::USD);
            let scaled = m.scale(dec!(0.8)).unwrap();
            prop_assert!(!scaled.amount().is_sign_negative() || scaled.is_zero());
            prop_assert!(scaled.amount() <= m.amount());
        }
    }
}

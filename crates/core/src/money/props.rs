//! Property-based tests for money operations.
//!
//! - Construction round-trip through the textual form
//! - Arithmetic closure (no precision loss)
//! - Banker's rounding correctness
//! - Allocation sum invariant

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::Money;
use super::rounding::round_half_even;

/// Strategy to generate signed decimal amounts (-1,000,000.0000 to 1,000,000.0000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

/// Strategy to generate positive amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate currency codes.
fn currency() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["USD", "EUR", "JPY", "KWD", "IDR"]).prop_map(str::to_string)
}

/// Strategy to generate decimal places (0 to 4).
fn decimal_places() -> impl Strategy<Value = u32> {
    0u32..=4
}

/// Strategy to generate 1-10 non-negative ratios with a positive sum.
fn ratios() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0u32..1_000, 1..10)
        .prop_filter("ratios must sum to a positive number", |values| {
            values.iter().any(|value| *value > 0)
        })
        .prop_map(|values| values.into_iter().map(|value| Decimal::new(i64::from(value), 1)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Display then parse yields an equal value.
    #[test]
    fn prop_display_round_trip(amount in amount(), currency in currency()) {
        let money = Money::new(amount, &currency).unwrap();
        let text = money.to_string();
        let suffix = format!(" {currency}");
        prop_assert_eq!(text.parse::<Money>().unwrap(), money);
        prop_assert!(text.ends_with(&suffix));
    }

    /// x + y - y == x, exactly.
    #[test]
    fn prop_plus_minus_closure(x in amount(), y in amount()) {
        let x = Money::new(x, "USD").unwrap();
        let y = Money::new(y, "USD").unwrap();
        prop_assert_eq!(x.plus(&y).unwrap().minus(&y).unwrap(), x);
    }

    /// Different currencies never mix.
    #[test]
    fn prop_mismatch_always_fails(x in amount(), y in amount()) {
        let usd = Money::new(x, "USD").unwrap();
        let eur = Money::new(y, "EUR").unwrap();
        prop_assert!(usd.plus(&eur).is_err());
        prop_assert!(usd.compare(&eur).is_err());
        prop_assert!(usd != eur);
    }

    /// Rounded result has at most `dp` decimal places and is within half a unit.
    #[test]
    fn prop_round_bounds(amount in amount(), dp in decimal_places()) {
        let money = Money::new(amount, "USD").unwrap();
        let rounded = money.round(Some(dp)).amount();

        prop_assert!(rounded.scale() <= dp);
        let half_unit = Decimal::new(5, dp + 1);
        prop_assert!((rounded - amount).abs() <= half_unit);
    }

    /// Rounding twice is the same as rounding once.
    #[test]
    fn prop_round_idempotent(amount in amount(), dp in decimal_places()) {
        let once = round_half_even(amount, dp);
        prop_assert_eq!(round_half_even(once, dp), once);
    }

    /// Exact midpoints round to an even last digit.
    #[test]
    fn prop_midpoint_rounds_to_even(units in -1_000_000i64..1_000_000i64) {
        let midpoint = Decimal::new(units * 10 + 5, 1);
        let rounded = round_half_even(midpoint, 0);
        prop_assert!((rounded % Decimal::TWO).is_zero());
    }

    /// Shares sum exactly to the rounded amount, in order and currency.
    #[test]
    fn prop_allocate_sum_invariant(
        total in positive_amount(),
        ratios in ratios(),
        dp in decimal_places(),
    ) {
        let money = Money::new(total, "EUR").unwrap();
        let shares = money.allocate(&ratios, Some(dp)).unwrap();

        prop_assert_eq!(shares.len(), ratios.len());
        let sum: Decimal = shares.iter().map(Money::amount).sum();
        prop_assert_eq!(sum, money.round(Some(dp)).amount());
        for share in &shares {
            prop_assert_eq!(share.currency(), money.currency());
            prop_assert!(share.amount().scale() <= dp);
        }
    }

    /// Only the first share absorbs remainders; the rest are never negative.
    #[test]
    fn prop_allocate_non_negative(total in positive_amount(), ratios in ratios()) {
        let money = Money::new(total, "USD").unwrap();
        let shares = money.allocate(&ratios, None).unwrap();
        for share in &shares[1..] {
            prop_assert!(!share.is_negative());
        }
    }

    /// Equal allocation of a two-decimal amount loses nothing.
    #[test]
    fn prop_allocate_equal_sum(total in positive_amount(), count in 1usize..50) {
        let money = Money::new(total, "USD").unwrap();
        let shares = money.allocate_equal(count, None).unwrap();
        prop_assert_eq!(shares.len(), count);
        let sum: Decimal = shares.iter().map(Money::amount).sum();
        prop_assert_eq!(sum, total);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Specific example: 0.05 split 3:1, rounding error absorbed by the first share.
    #[test]
    fn test_allocate_nickel() {
        let shares = Money::new("0.05", "USD").unwrap().allocate(&[3, 1], None).unwrap();
        let sum: Decimal = shares.iter().map(Money::amount).sum();
        assert_eq!(sum, dec!(0.05));
    }

    /// Specific example: 2.5 JPY rounds to 2, 3.5 JPY rounds to 4.
    #[test]
    fn test_bankers_rounding_jpy() {
        assert_eq!(Money::new(2.5, "JPY").unwrap().round(Some(0)).amount(), dec!(2));
        assert_eq!(Money::new(3.5, "JPY").unwrap().round(Some(0)).amount(), dec!(4));
    }

    /// Specific example: zero-total allocation is rejected.
    #[test]
    fn test_zero_total_rejected() {
        let err = Money::new(10, "USD").unwrap().allocate(&[0, 0], None).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ALLOCATION");
    }
}

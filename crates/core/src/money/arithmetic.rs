//! Currency-matched arithmetic.
//!
//! Results are exact and unrounded; rounding is always a separate step.

use std::ops::Neg;

use tender_shared::{MoneyError, MoneyResult};

use super::{Money, Numeric};

impl Money {
    /// Adds two amounts of the same currency.
    pub fn plus(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| MoneyError::Overflow(format!("{self} + {other}")))?;
        Ok(Self::from_decimal(amount, self.currency))
    }

    /// Subtracts an amount of the same currency.
    pub fn minus(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| MoneyError::Overflow(format!("{self} - {other}")))?;
        Ok(Self::from_decimal(amount, self.currency))
    }

    /// Multiplies by a plain number, at full precision.
    ///
    /// Non-finite float scalars, and floats that do not fit a decimal
    /// exactly, are rejected.
    pub fn times(&self, scalar: impl Into<Numeric>) -> MoneyResult<Self> {
        let scalar = scalar.into();
        let factor = scalar.to_decimal().map_err(|reason| {
            MoneyError::InvalidArgument(format!("scalar {scalar}: {reason}"))
        })?;
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| MoneyError::Overflow(format!("{self} * {scalar}")))?;
        Ok(Self::from_decimal(amount, self.currency))
    }

    /// Same amount with the opposite sign.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_decimal(-self.amount, self.currency)
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_decimal(self.amount.abs(), self.currency)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, "USD").unwrap()
    }

    #[test]
    fn test_plus() {
        let sum = usd(dec!(0.1)).plus(&usd(dec!(0.2))).unwrap();
        assert_eq!(sum.amount(), dec!(0.3));
        assert_eq!(sum.currency().as_str(), "USD");
    }

    #[test]
    fn test_minus() {
        let diff = usd(dec!(10)).minus(&usd(dec!(10.01))).unwrap();
        assert_eq!(diff.amount(), dec!(-0.01));
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(1, "USD").unwrap();
        let eur = Money::new(1, "EUR").unwrap();

        let err = usd.plus(&eur).unwrap_err();
        assert_eq!(err, MoneyError::mismatch("USD", "EUR"));

        let err = eur.minus(&usd).unwrap_err();
        assert_eq!(err, MoneyError::mismatch("EUR", "USD"));
    }

    #[test]
    fn test_operands_untouched() {
        let a = usd(dec!(5));
        let b = usd(dec!(3));
        let _ = a.plus(&b).unwrap();
        let _ = a.minus(&b).unwrap();
        let _ = a.times(2).unwrap();
        assert_eq!(a.amount(), dec!(5));
        assert_eq!(b.amount(), dec!(3));
    }

    #[test]
    fn test_plus_minus_closure() {
        let x = usd(dec!(1234.5678));
        let y = usd(dec!(0.0001));
        assert_eq!(x.plus(&y).unwrap().minus(&y).unwrap(), x);
    }

    #[test]
    fn test_times_is_unrounded() {
        let product = usd(dec!(10.01)).times(dec!(0.333)).unwrap();
        assert_eq!(product.amount(), dec!(3.33333));

        let product = usd(dec!(2.5)).times(3).unwrap();
        assert_eq!(product.amount(), dec!(7.5));

        let product = usd(dec!(100)).times(0.15).unwrap();
        assert_eq!(product.amount(), dec!(15));
    }

    #[test]
    fn test_times_rejects_non_finite() {
        let err = usd(dec!(1)).times(f64::INFINITY).unwrap_err();
        assert_eq!(err.error_code(), "TYPE_ERROR");
    }

    #[test]
    fn test_times_rejects_inexact_float() {
        let err = usd(dec!(1)).times(1e-30).unwrap_err();
        assert_eq!(err.error_code(), "TYPE_ERROR");
    }

    #[test]
    fn test_overflow() {
        let err = usd(Decimal::MAX).plus(&usd(Decimal::MAX)).unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");

        let err = usd(Decimal::MAX).times(10).unwrap_err();
        assert_eq!(err.error_code(), "OVERFLOW");
    }

    #[test]
    fn test_negated_and_abs() {
        let money = usd(dec!(-4.20));
        assert_eq!(money.negated().amount(), dec!(4.20));
        assert_eq!((-money).amount(), dec!(4.20));
        assert_eq!(money.abs().amount(), dec!(4.20));
        assert_eq!(money.abs().abs(), money.abs());
    }
}

//! Proportional allocation with exact remainder distribution.
//!
//! Shares always sum EXACTLY to the rounded original amount (no cents lost):
//! 1. Round the amount to the target precision
//! 2. Compute each share as `amount * ratio / total`, rounded half-even
//! 3. Track what is left after subtracting every share
//! 4. Give any leftover (the accumulated rounding error) to the first share

use rust_decimal::Decimal;
use tender_shared::{MoneyError, MoneyResult};

use super::rounding::round_half_even;
use super::{Money, Numeric};
use crate::context::{self, MoneyContext};

impl Money {
    /// Splits the amount by `ratios`, using the global context.
    ///
    /// # Example
    ///
    /// ```
    /// use tender_core::Money;
    ///
    /// // 0.05 split 3:1 = [0.04, 0.01], sum = 0.05
    /// let shares = Money::new("0.05", "USD").unwrap().allocate(&[3, 1], None).unwrap();
    /// assert_eq!(shares[0].to_string(), "0.04 USD");
    /// assert_eq!(shares[1].to_string(), "0.01 USD");
    /// ```
    pub fn allocate<R>(&self, ratios: &[R], precision: Option<u32>) -> MoneyResult<Vec<Self>>
    where
        R: Into<Numeric> + Copy,
    {
        self.allocate_with(ratios, precision, context::global())
    }

    /// Splits the amount by `ratios`.
    ///
    /// Shares are rounded to `precision` (default: currency precision),
    /// returned in ratio order, and sum exactly to `self.round_with(precision)`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `ratios` is empty or holds a float that is not
    ///   finite or has no exact decimal form
    /// - `InvalidAllocation` if a ratio is negative or the ratios sum to zero
    pub fn allocate_with<R>(
        &self,
        ratios: &[R],
        precision: Option<u32>,
        ctx: &MoneyContext,
    ) -> MoneyResult<Vec<Self>>
    where
        R: Into<Numeric> + Copy,
    {
        if ratios.is_empty() {
            return Err(MoneyError::InvalidArgument(
                "ratios must be a non-empty sequence".to_string(),
            ));
        }

        let ratios = ratios
            .iter()
            .map(|ratio| {
                let ratio: Numeric = (*ratio).into();
                ratio.to_decimal().map_err(|reason| {
                    MoneyError::InvalidArgument(format!("ratio {ratio}: {reason}"))
                })
            })
            .collect::<MoneyResult<Vec<Decimal>>>()?;

        if let Some(negative) = ratios.iter().find(|ratio| **ratio < Decimal::ZERO) {
            return Err(MoneyError::InvalidAllocation(format!(
                "ratio {negative} is negative"
            )));
        }

        let total = ratios
            .iter()
            .try_fold(Decimal::ZERO, |sum, ratio| sum.checked_add(*ratio))
            .ok_or_else(|| MoneyError::Overflow("sum of ratios".to_string()))?;
        if total <= Decimal::ZERO {
            return Err(MoneyError::InvalidAllocation(format!(
                "ratios must sum to a positive number, got {total}"
            )));
        }

        let decimal_places = self.resolve_precision(precision, ctx);
        let amount = round_half_even(self.amount, decimal_places);

        let mut remainder = amount;
        let mut shares = Vec::with_capacity(ratios.len());
        for ratio in &ratios {
            let share = ratio
                .checked_div(total)
                .and_then(|fraction| amount.checked_mul(fraction))
                .map(|exact| round_half_even(exact, decimal_places))
                .ok_or_else(|| MoneyError::Overflow(format!("share {ratio}/{total} of {self}")))?;
            remainder -= share;
            shares.push(share);
        }

        // Rounding error lands on the first share.
        if !remainder.is_zero() {
            shares[0] = round_half_even(shares[0] + remainder, decimal_places);
        }

        Ok(shares
            .into_iter()
            .map(|share| Self::from_decimal(share, self.currency))
            .collect())
    }

    /// Splits the amount into `count` equal shares, using the global context.
    ///
    /// ```
    /// use tender_core::Money;
    ///
    /// // 100 / 3 = [33.34, 33.33, 33.33], sum = 100.00
    /// let shares = Money::new(100, "USD").unwrap().allocate_equal(3, None).unwrap();
    /// assert_eq!(shares[0].to_string(), "33.34 USD");
    /// ```
    pub fn allocate_equal(&self, count: usize, precision: Option<u32>) -> MoneyResult<Vec<Self>> {
        self.allocate_equal_with(count, precision, context::global())
    }

    /// Splits the amount into `count` equal shares.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `count` is zero.
    pub fn allocate_equal_with(
        &self,
        count: usize,
        precision: Option<u32>,
        ctx: &MoneyContext,
    ) -> MoneyResult<Vec<Self>> {
        self.allocate_with(&vec![Decimal::ONE; count], precision, ctx)
    }
}

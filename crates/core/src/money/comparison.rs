//! Ordering and sign predicates.

use std::cmp::Ordering;

use tender_shared::MoneyResult;

use super::Money;

impl Money {
    /// Compares two amounts of the same currency.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// `self < other`; fails on currency mismatch.
    pub fn lt(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// `self <= other`; fails on currency mismatch.
    pub fn lte(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// `self > other`; fails on currency mismatch.
    pub fn gt(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self >= other`; fails on currency mismatch.
    pub fn gte(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is not zero.
    #[must_use]
    pub fn is_not_zero(&self) -> bool {
        !self.is_zero()
    }

    /// Returns true if the amount is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

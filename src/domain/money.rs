use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal` so invoice totals, paid
/// amounts, tax and payment amounts cannot be mixed up with plain numbers.
/// No sign or scale rules are enforced: payment amounts reach the decision
/// procedure exactly as the caller supplied them, so arithmetic is checked
/// and reports [`PaymentError::AmountOverflow`] instead of panicking.
///
/// In JSON the value is read exactly whether it is written as a string or as
/// a bare number, and written back as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::arbitrary_precision")] pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(PaymentError::AmountOverflow)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(PaymentError::AmountOverflow)
    }

    /// Scales the amount by `rate`, e.g. to derive tax from a payment.
    pub fn checked_scale(self, rate: Decimal) -> Result<Self> {
        self.0
            .checked_mul(rate)
            .map(Self)
            .ok_or(PaymentError::AmountOverflow)
    }

    /// Sums `amounts`, failing on the first overflow.
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Result<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, m| acc.checked_add(m))
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.normalize().fmt(f)
    }
}

use super::money::Money;
use super::outcome::PaymentOutcome;
use super::payment::Payment;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};

/// Flat tax accrued on every payment applied to a commercial invoice.
pub const COMMERCIAL_TAX_RATE: Decimal = dec!(0.14);

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    #[default]
    Standard,
    Commercial,
}

/// A billable record with a total amount, accumulated payments and tax.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Invoice {
    /// The identifier payments are matched against.
    pub reference: String,
    /// Total billable amount.
    pub amount: Money,
    /// Running total of accepted payments.
    #[serde(default)]
    pub amount_paid: Money,
    /// Tax accrued on payments (commercial invoices only).
    #[serde(default)]
    pub tax_amount: Money,
    /// Accepted payments in arrival order. A `null` or missing list is read
    /// as an empty one.
    #[serde(default, deserialize_with = "deserialize_payments")]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub r#type: InvoiceType,
}

fn deserialize_payments<'de, D>(deserializer: D) -> std::result::Result<Vec<Payment>, D::Error>
where
    D: Deserializer<'de>,
{
    let payments = Option::<Vec<Payment>>::deserialize(deserializer)?;
    Ok(payments.unwrap_or_default())
}

impl Invoice {
    pub fn new(reference: impl Into<String>, amount: Money, r#type: InvoiceType) -> Self {
        Self {
            reference: reference.into(),
            amount,
            r#type,
            ..Self::default()
        }
    }

    /// Sum of the amounts of the payments recorded so far.
    pub fn total_paid(&self) -> Result<Money> {
        Money::checked_sum(self.payments.iter().map(|p| p.amount))
    }

    /// What is left to pay according to `amount_paid`.
    pub fn remaining(&self) -> Result<Money> {
        self.amount.checked_sub(self.amount_paid)
    }

    /// Decides how `payment` would be resolved against this invoice.
    ///
    /// Checks run in a fixed order and the first match wins. The invoice is
    /// never touched here; `apply` commits the payment when
    /// [`PaymentOutcome::applies_payment`] says so. Amounts too large to
    /// add up fail with [`PaymentError::AmountOverflow`].
    pub fn assess(&self, payment: &Payment) -> Result<PaymentOutcome> {
        if self.amount.is_zero() {
            return if self.payments.is_empty() {
                Ok(PaymentOutcome::NoPaymentNeeded)
            } else {
                Err(PaymentError::InvalidInvoiceState)
            };
        }

        if !self.payments.is_empty() {
            let total_paid = self.total_paid()?;

            if !total_paid.is_zero() && self.amount == total_paid {
                return Ok(PaymentOutcome::AlreadyFullyPaid);
            }

            let remaining = self.remaining()?;

            if !total_paid.is_zero() && payment.amount > remaining {
                return Ok(PaymentOutcome::ExceedsRemaining);
            }

            return Ok(if remaining == payment.amount {
                PaymentOutcome::FinalPartialPayment
            } else {
                PaymentOutcome::AnotherPartialPayment
            });
        }

        Ok(if payment.amount > self.amount {
            PaymentOutcome::ExceedsInvoiceAmount
        } else if payment.amount == self.amount {
            PaymentOutcome::FullyPaid
        } else {
            PaymentOutcome::PartiallyPaid
        })
    }

    /// Commits an accepted payment: bumps the paid amount, accrues tax for
    /// commercial invoices and records the payment.
    ///
    /// On [`PaymentError::AmountOverflow`] the invoice is left unchanged.
    pub fn apply(&mut self, payment: Payment) -> Result<()> {
        let amount_paid = self.amount_paid.checked_add(payment.amount)?;
        let tax_amount = match self.r#type {
            InvoiceType::Commercial => self
                .tax_amount
                .checked_add(payment.amount.checked_scale(COMMERCIAL_TAX_RATE)?)?,
            InvoiceType::Standard => self.tax_amount,
        };

        self.amount_paid = amount_paid;
        self.tax_amount = tax_amount;
        self.payments.push(payment);
        Ok(())
    }
}

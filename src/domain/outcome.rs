use serde::{Deserialize, Serialize};

/// The branch of the decision procedure that resolved a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Zero-amount invoice without payments.
    NoPaymentNeeded,
    /// Existing payments already cover the invoice amount.
    AlreadyFullyPaid,
    /// Payment overshoots what is left after earlier payments.
    ExceedsRemaining,
    /// Payment settles the rest of a partially paid invoice.
    FinalPartialPayment,
    /// Payment adds to a partially paid invoice without settling it.
    AnotherPartialPayment,
    /// First payment is larger than the whole invoice.
    ExceedsInvoiceAmount,
    /// First payment settles the whole invoice.
    FullyPaid,
    /// First payment covers part of the invoice.
    PartiallyPaid,
}

impl PaymentOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            PaymentOutcome::NoPaymentNeeded => "no payment needed",
            PaymentOutcome::AlreadyFullyPaid => "invoice was already fully paid",
            PaymentOutcome::ExceedsRemaining => {
                "the payment is greater than the partial amount remaining"
            }
            PaymentOutcome::FinalPartialPayment => {
                "final partial payment received, invoice is now fully paid"
            }
            PaymentOutcome::AnotherPartialPayment => {
                "another partial payment received, still not fully paid"
            }
            PaymentOutcome::ExceedsInvoiceAmount => "the payment is greater than the invoice amount",
            PaymentOutcome::FullyPaid => "invoice is now fully paid",
            PaymentOutcome::PartiallyPaid => "invoice is now partially paid",
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            PaymentOutcome::ExceedsRemaining | PaymentOutcome::ExceedsInvoiceAmount
        )
    }

    /// Whether the payment must be committed to the invoice and persisted.
    pub fn applies_payment(&self) -> bool {
        matches!(
            self,
            PaymentOutcome::FinalPartialPayment
                | PaymentOutcome::AnotherPartialPayment
                | PaymentOutcome::FullyPaid
                | PaymentOutcome::PartiallyPaid
        )
    }
}

/// Result handed back to the caller of `process_payment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInvoiceResult {
    pub is_success: bool,
    pub message: String,
}

impl From<PaymentOutcome> for ProcessInvoiceResult {
    fn from(outcome: PaymentOutcome) -> Self {
        Self {
            is_success: outcome.is_success(),
            message: outcome.message().to_string(),
        }
    }
}

use crate::domain::invoice::Invoice;
use crate::domain::outcome::ProcessInvoiceResult;
use crate::domain::payment::Payment;
use crate::domain::ports::InvoiceStoreBox;
use crate::error::{PaymentError, Result};
use tracing::{debug, info};

/// Applies payments to the invoices they reference.
///
/// `PaymentProcessor` owns the invoice store. Each call fetches the invoice,
/// decides the outcome, and only for accepted payments mutates the invoice
/// and writes it back before returning.
pub struct PaymentProcessor {
    invoice_store: InvoiceStoreBox,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` backed by `invoice_store`.
    pub fn new(invoice_store: InvoiceStoreBox) -> Self {
        Self { invoice_store }
    }

    /// Resolves a single payment.
    ///
    /// # Errors
    ///
    /// * [`PaymentError::InvoiceNotFound`] when no invoice matches
    ///   `payment.reference`.
    /// * [`PaymentError::InvalidInvoiceState`] when the invoice has a zero
    ///   amount but carries payments.
    /// * [`PaymentError::AmountOverflow`] when the amounts involved cannot be
    ///   added up; nothing is saved in that case.
    /// * Any storage error raised by the store.
    ///
    /// Rejected payments are not errors: they come back as a result with
    /// `is_success == false` and leave the invoice untouched.
    pub async fn process_payment(&self, payment: Payment) -> Result<ProcessInvoiceResult> {
        let mut invoice = self
            .invoice_store
            .get_invoice(&payment.reference)
            .await?
            .ok_or(PaymentError::InvoiceNotFound)?;

        let outcome = invoice.assess(&payment)?;
        debug!(
            reference = %payment.reference,
            amount = %payment.amount,
            ?outcome,
            "payment assessed"
        );

        if outcome.applies_payment() {
            invoice.apply(payment)?;
            info!(
                reference = %invoice.reference,
                amount_paid = %invoice.amount_paid,
                tax_amount = %invoice.tax_amount,
                "payment applied"
            );
            self.invoice_store.save_invoice(invoice).await?;
        }

        Ok(outcome.into())
    }

    /// Consumes the processor and returns the final state of all invoices.
    pub async fn into_invoices(self) -> Result<Vec<Invoice>> {
        self.invoice_store.all_invoices().await
    }
}

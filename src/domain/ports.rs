use super::invoice::Invoice;
use crate::error::Result;
use async_trait::async_trait;

/// Lookup and persistence of invoices, keyed by reference.
///
/// The payment processor only ever asks for one invoice and writes it back;
/// how invoices are kept is up to the implementation.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn get_invoice(&self, reference: &str) -> Result<Option<Invoice>>;
    /// Inserts or replaces the invoice stored under `invoice.reference`.
    async fn save_invoice(&self, invoice: Invoice) -> Result<()>;
    /// Every stored invoice, ordered by reference.
    async fn all_invoices(&self) -> Result<Vec<Invoice>>;
}

pub type InvoiceStoreBox = Box<dyn InvoiceStore>;

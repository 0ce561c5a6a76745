#![allow(dead_code)]

use invoice_payments::domain::invoice::{Invoice, InvoiceType};
use invoice_payments::domain::money::Money;
use invoice_payments::domain::payment::Payment;
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

pub fn money(value: Decimal) -> Money {
    Money::new(value)
}

pub fn payment(reference: &str, amount: Decimal) -> Payment {
    Payment::new(reference, money(amount))
}

/// An invoice that already carries the given payments, with `amount_paid`
/// matching their sum.
pub fn invoice_with_payments(
    reference: &str,
    amount: Decimal,
    r#type: InvoiceType,
    paid: &[Decimal],
) -> Invoice {
    let mut invoice = Invoice::new(reference, money(amount), r#type);
    invoice.payments = paid.iter().map(|a| payment(reference, *a)).collect();
    invoice.amount_paid = invoice.total_paid().unwrap();
    invoice
}

pub fn write_invoices(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();
    file
}

pub fn write_payments(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "reference, amount").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

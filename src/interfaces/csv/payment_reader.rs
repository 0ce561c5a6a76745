use crate::domain::money::Money;
use crate::domain::payment::Payment;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One `reference,amount` row as it appears in the file.
///
/// The amount stays text until it is parsed as a decimal: csv would otherwise
/// guess a float for it and round long amounts.
#[derive(Debug, Deserialize)]
struct PaymentRecord {
    reference: String,
    amount: String,
}

impl TryFrom<PaymentRecord> for Payment {
    type Error = PaymentError;

    fn try_from(record: PaymentRecord) -> Result<Self> {
        let amount: Money = record
            .amount
            .parse()
            .map_err(|_| PaymentError::InvalidAmount(record.amount.clone()))?;
        Ok(Payment::new(record.reference, amount))
    }
}

/// Reads payments from a CSV file with a `reference,amount` header.
///
/// Every row must have exactly both columns; short, long, or unparsable rows
/// come back as errors for that row alone.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one `Result<Payment>` per data row.
    pub fn payments(self) -> impl Iterator<Item = Result<Payment>> {
        self.reader
            .into_deserialize::<PaymentRecord>()
            .map(|record| Payment::try_from(record?))
    }
}

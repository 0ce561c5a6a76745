use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("There is no invoice matching this payment")]
    InvoiceNotFound,
    #[error("The invoice is in an invalid state, it has an amount of 0 and it has payments.")]
    InvalidInvoiceState,
    #[error("Amount overflow while applying the payment")]
    AmountOverflow,
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for PaymentError {
    fn from(err: rocksdb::Error) -> Self {
        PaymentError::Storage(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;

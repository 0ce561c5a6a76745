use clap::Parser;
use invoice_payments::application::processor::PaymentProcessor;
use invoice_payments::domain::ports::InvoiceStoreBox;
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceStore;
use invoice_payments::interfaces::csv::payment_reader::PaymentReader;
use invoice_payments::interfaces::csv::result_writer::ResultWriter;
use invoice_payments::interfaces::json;
use invoice_payments::telemetry;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file (`reference,amount`)
    input: PathBuf,

    /// JSON array of invoices to load into the store before processing
    #[arg(long, env = "INVOICE_PAYMENTS_INVOICES")]
    invoices: Option<PathBuf>,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "INVOICE_PAYMENTS_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Write the final state of every invoice as JSON to this file
    #[arg(long)]
    dump_invoices: Option<PathBuf>,
}

#[cfg(feature = "storage-rocksdb")]
fn open_store(db_path: Option<&Path>) -> Result<InvoiceStoreBox> {
    use invoice_payments::infrastructure::rocksdb::RocksDBInvoiceStore;

    let store: InvoiceStoreBox = match db_path {
        Some(path) => Box::new(RocksDBInvoiceStore::open(path).into_diagnostic()?),
        None => Box::new(InMemoryInvoiceStore::new()),
    };
    Ok(store)
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_store(db_path: Option<&Path>) -> Result<InvoiceStoreBox> {
    if db_path.is_some() {
        tracing::warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
        );
    }
    Ok(Box::new(InMemoryInvoiceStore::new()))
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let store = open_store(cli.db_path.as_deref())?;

    if let Some(path) = &cli.invoices {
        let invoices = json::read_invoices(File::open(path).into_diagnostic()?).into_diagnostic()?;
        info!(count = invoices.len(), "seeding invoices");
        for invoice in invoices {
            store.save_invoice(invoice).await.into_diagnostic()?;
        }
    }

    let processor = PaymentProcessor::new(store);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = PaymentReader::new(file);
    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());

    for payment_result in reader.payments() {
        match payment_result {
            Ok(payment) => {
                let reference = payment.reference.clone();
                match processor.process_payment(payment).await {
                    Ok(result) => writer.write_result(&reference, &result).into_diagnostic()?,
                    Err(e) => error!(%reference, "Error processing payment: {}", e),
                }
            }
            Err(e) => error!("Error reading payment: {}", e),
        }
    }
    writer.flush().into_diagnostic()?;

    if let Some(path) = &cli.dump_invoices {
        let invoices = processor.into_invoices().await.into_diagnostic()?;
        json::write_invoices(File::create(path).into_diagnostic()?, &invoices).into_diagnostic()?;
    }

    Ok(())
}

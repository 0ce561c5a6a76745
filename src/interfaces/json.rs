//! Invoice seed and dump files: a JSON array of invoices.

use crate::domain::invoice::Invoice;
use crate::error::Result;
use std::io::{Read, Write};

pub fn read_invoices<R: Read>(source: R) -> Result<Vec<Invoice>> {
    Ok(serde_json::from_reader(source)?)
}

pub fn write_invoices<W: Write>(sink: W, invoices: &[Invoice]) -> Result<()> {
    serde_json::to_writer_pretty(sink, invoices)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::InvoiceType;
    use crate::domain::money::Money;
    use crate::error::PaymentError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_seed_file() {
        let data = r#"[
            {"reference": "A", "amount": "10", "payments": null},
            {"reference": "B", "amount": "20", "amount_paid": "5", "type": "commercial",
             "payments": [{"reference": "B", "amount": "5"}]}
        ]"#;

        let invoices = read_invoices(data.as_bytes()).unwrap();
        assert_eq!(invoices.len(), 2);
        assert!(invoices[0].payments.is_empty());
        assert_eq!(invoices[1].r#type, InvoiceType::Commercial);
        assert_eq!(invoices[1].total_paid().unwrap(), Money::new(dec!(5)));
    }

    #[test]
    fn test_dump_reads_back() {
        let invoice = Invoice::new("A", Money::new(dec!(12.5)), InvoiceType::Commercial);
        let mut buf = Vec::new();
        write_invoices(&mut buf, std::slice::from_ref(&invoice)).unwrap();

        assert_eq!(read_invoices(buf.as_slice()).unwrap(), vec![invoice]);
    }

    #[test]
    fn test_rejects_non_array() {
        let result = read_invoices(r#"{"reference": "A"}"#.as_bytes());
        assert!(matches!(result, Err(PaymentError::JsonError(_))));
    }
}

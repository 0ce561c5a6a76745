use crate::domain::outcome::ProcessInvoiceResult;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ResultRecord<'a> {
    reference: &'a str,
    success: bool,
    message: &'a str,
}

/// Writes payment results as CSV rows of `reference,success,message`.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, reference: &str, result: &ProcessInvoiceResult) -> Result<()> {
        self.writer.serialize(ResultRecord {
            reference,
            success: result.is_success,
            message: &result.message,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::PaymentOutcome;

    #[test]
    fn test_writes_header_and_quoted_messages() {
        let mut buf = Vec::new();
        {
            let mut writer = ResultWriter::new(&mut buf);
            writer
                .write_result("INV-1", &PaymentOutcome::PartiallyPaid.into())
                .unwrap();
            writer
                .write_result("INV-1", &PaymentOutcome::FinalPartialPayment.into())
                .unwrap();
            writer.flush().unwrap();
        }

        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "reference,success,message");
        assert_eq!(lines[1], "INV-1,true,invoice is now partially paid");
        assert_eq!(
            lines[2],
            "INV-1,true,\"final partial payment received, invoice is now fully paid\""
        );
    }
}

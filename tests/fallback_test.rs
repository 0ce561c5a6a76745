use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

const INVOICES: &str = r#"[{"reference": "A", "amount": "100"}]"#;

#[cfg(not(feature = "storage-rocksdb"))]
#[test]
fn test_rocksdb_fallback_warning() {
    let invoices = common::write_invoices(INVOICES);
    let payments = common::write_payments(&["A, 100.0"]);
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg(payments.path())
        .arg("--invoices")
        .arg(invoices.path())
        .arg("--db-path")
        .arg(dir.path().join("some_db"));

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Falling back to in-memory storage"))
        .stdout(predicate::str::contains("A,true,invoice is now fully paid"));
}

#[cfg(feature = "storage-rocksdb")]
#[test]
fn test_rocksdb_no_fallback_warning() {
    let invoices = common::write_invoices(INVOICES);
    let payments = common::write_payments(&["A, 100.0"]);
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg(payments.path())
        .arg("--invoices")
        .arg(invoices.path())
        .arg("--db-path")
        .arg(dir.path().join("test_db"));

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Falling back").not());
}

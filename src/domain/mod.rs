//! Domain layer: invoices, payments and the rules that decide how a payment
//! lands on an invoice.

pub mod invoice;
pub mod money;
pub mod outcome;
pub mod payment;
pub mod ports;

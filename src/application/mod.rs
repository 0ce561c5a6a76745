//! Application layer orchestrating the domain rules against a store.
//!
//! This module defines the `PaymentProcessor`, the entry point for applying a
//! payment to the invoice it references.

pub mod processor;

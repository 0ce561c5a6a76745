use super::money::Money;
use serde::{Deserialize, Serialize};

/// A monetary amount submitted against an invoice reference.
///
/// Once accepted it is appended to the invoice's payment history and never
/// mutated again.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct Payment {
    pub reference: String,
    pub amount: Money,
}

impl Payment {
    pub fn new(reference: impl Into<String>, amount: Money) -> Self {
        Self {
            reference: reference.into(),
            amount,
        }
    }
}

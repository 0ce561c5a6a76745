//! Adapters between external formats and the domain types.

pub mod csv;
pub mod json;

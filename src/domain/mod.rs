//! Domain aggregates exposed by the directory service layer.

pub mod shop;
pub mod types;

//! Diesel models and configuration structures.

#[cfg(feature = "server")]
pub mod config;
pub mod shop;

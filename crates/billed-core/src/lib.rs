//! Billed Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! receipt validation shared across all Billed components, plus the
//! `BillsStore` trait that both the HTTP client and test doubles implement.

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorPresentation, LogLevel};
pub use store::BillsStore;
pub use validation::{ReceiptFile, ReceiptValidator};

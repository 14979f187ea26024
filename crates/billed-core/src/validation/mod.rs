//! Validation modules

pub mod receipt;

pub use receipt::{ReceiptFile, ReceiptValidator, ALLOWED_RECEIPT_CONTENT_TYPES};

//! Data models for the application
//!
//! This module contains all data structures used throughout the application,
//! organized by domain.

mod bill;
mod user;

// Re-export all models for convenient imports
pub use bill::*;
pub use user::*;

//! Test doubles for the submission flow
//!
//! These mocks allow testing the handler without a running bills API.

mod mock_store;

pub use mock_store::{MockBillsStore, RecordingNavigator};
